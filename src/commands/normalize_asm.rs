use std::path::PathBuf;

use console::style;
use miette::Result;

use stampgen::config::Config;
use stampgen::format::asm::normalize_file;
use stampgen::{GenOption, Stage, StampError};

pub fn run(files: Vec<PathBuf>, label_prefix: String, indent: String) -> Result<()> {
    // Validates the dialect.
    let config = Config::build([GenOption::asm_dialect(label_prefix, indent)])?;

    for file in &files {
        normalize_file(file, config.asm_dialect()).map_err(|e| StampError::Io {
            stage: Stage::Format,
            context: format!("normalizing assembly {}", file.display()),
            source: e,
        })?;
        println!("  {} {}", style("normalized").green(), file.display());
    }

    println!(
        "\n{} {} file(s) normalized",
        style("✓").green().bold(),
        files.len()
    );
    Ok(())
}
