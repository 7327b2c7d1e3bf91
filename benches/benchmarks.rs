use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::path::PathBuf;

use serde_json::Value;

use stampgen::format::asm::{normalize, AsmDialect};
use stampgen::input::{load_data, load_fragments};
use stampgen::render::{aggregate, Engine, FunctionSet};
use stampgen::GenOption;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn element_inputs() -> (Vec<String>, Value) {
    let dir = fixture_path("element");
    let fragments = load_fragments(&[dir.join("types.tera"), dir.join("ops.tera")]).unwrap();
    let data = load_data(&dir.join("data.json")).unwrap();
    (fragments, data)
}

fn sample_assembly() -> String {
    let mut src = String::from("#include \"textflag.h\"\n\n\n\n");
    for i in 0..200 {
        src.push_str(&format!("TEXT ·f{i}(SB), NOSPLIT, $0-24\n"));
        src.push_str("   MOVQ x+8(FP), AX\n\n\n\t ADDQ AX, BX  \nRET\n\n");
    }
    src
}

fn bench_parse(c: &mut Criterion) {
    let (fragments, _) = element_inputs();
    let source = aggregate(&fragments);
    let funcs = FunctionSet::new();

    c.bench_function("engine_parse", |b| {
        b.iter(|| {
            let engine = Engine::parse("element.go", black_box(&source), &funcs).unwrap();
            black_box(engine)
        });
    });
}

fn bench_render(c: &mut Criterion) {
    let (fragments, data) = element_inputs();
    let engine = Engine::parse("element.go", &aggregate(&fragments), &FunctionSet::new()).unwrap();

    c.bench_function("engine_render", |b| {
        b.iter(|| {
            let out = engine.render(black_box(&data)).unwrap();
            black_box(out)
        });
    });
}

fn bench_normalize_assembly(c: &mut Criterion) {
    let src = sample_assembly();
    let dialect = AsmDialect::default();

    c.bench_function("normalize_assembly", |b| {
        b.iter(|| {
            let out = normalize(black_box(&src), &dialect);
            black_box(out)
        });
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let (fragments, data) = element_inputs();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("element.go");

    c.bench_function("full_pipeline (header + render, no tools)", |b| {
        b.iter(|| {
            stampgen::generate(
                &output,
                &fragments,
                &data,
                vec![
                    GenOption::verbose(false),
                    GenOption::format(false),
                    GenOption::imports(false),
                    GenOption::package_with_doc("fp", "contains field arithmetic."),
                ],
            )
            .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_render,
    bench_normalize_assembly,
    bench_full_pipeline
);
criterion_main!(benches);
