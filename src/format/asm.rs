use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Prefix of the line that starts the first routine in Go assembly.
pub const DEFAULT_LABEL_PREFIX: &str = "TEXT ";

pub const DEFAULT_INDENT: &str = "    ";

/// How the normalizer finds the start of the instruction body, and how far it
/// indents it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsmDialect {
    pub label_prefix: String,
    pub indent: String,
}

impl AsmDialect {
    pub fn new(label_prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        Self {
            label_prefix: label_prefix.into(),
            indent: indent.into(),
        }
    }

    fn is_label_start(&self, trimmed: &str) -> bool {
        trimmed.starts_with(&self.label_prefix)
    }
}

impl Default for AsmDialect {
    fn default() -> Self {
        Self::new(DEFAULT_LABEL_PREFIX, DEFAULT_INDENT)
    }
}

/// Trim every line, collapse blank runs to a single blank line, and prefix
/// every retained line after the first label-start line with one
/// `dialect.indent`, blank lines included.
///
/// Accepts `\n`, `\r\n` and `\r` line endings; always emits `\n`.
pub fn normalize(input: &str, dialect: &AsmDialect) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut in_body = false;
    let mut prev_blank = false;

    for raw in unified.lines() {
        let line = raw.trim();
        let blank = line.is_empty();

        if !blank || !prev_blank {
            if in_body {
                out.push_str(&dialect.indent);
            }
            out.push_str(line);
            out.push('\n');
        }
        prev_blank = blank;

        if !in_body && dialect.is_label_start(line) {
            in_body = true;
        }
    }

    out
}

/// Normalize the assembly file at `path`.
///
/// The result is written to a temporary file next to `path` and renamed over
/// it, so a failed rewrite leaves the original contents. The file keeps its
/// permissions.
pub fn normalize_file(path: &Path, dialect: &AsmDialect) -> std::io::Result<()> {
    let input = std::fs::read_to_string(path)?;
    let output = normalize(&input, dialect);

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)?.permissions();
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.as_file().set_permissions(permissions)?;
    tmp.write_all(output.as_bytes())?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn norm(input: &str) -> String {
        normalize(input, &AsmDialect::default())
    }

    #[test]
    fn preamble_collapsed_and_body_indented() {
        let input = "#include \"textflag.h\"\n\n\n\n#define X R8\n\n\n\nTEXT ·add(SB), NOSPLIT, $0-24\nMOVQ a+0(FP), AX\nRET\n";
        let expected = "#include \"textflag.h\"\n\n#define X R8\n\nTEXT ·add(SB), NOSPLIT, $0-24\n    MOVQ a+0(FP), AX\n    RET\n";
        assert_eq!(norm(input), expected);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let input = "   #include \"textflag.h\"  \n\t TEXT ·f(SB), $0\n\t\tMOVQ $1, AX   \n";
        let expected = "#include \"textflag.h\"\nTEXT ·f(SB), $0\n    MOVQ $1, AX\n";
        assert_eq!(norm(input), expected);
    }

    #[test]
    fn body_blank_runs_collapse_and_are_indented() {
        let input = "TEXT ·f(SB), $0\n\n   \n\nMOVQ $1, AX\n\n\nRET\n";
        let expected = "TEXT ·f(SB), $0\n    \n    MOVQ $1, AX\n    \n    RET\n";
        assert_eq!(norm(input), expected);
    }

    #[test]
    fn later_label_lines_are_indented() {
        let input = "TEXT ·f(SB), $0\nRET\nTEXT ·g(SB), $0\nRET\n";
        let expected = "TEXT ·f(SB), $0\n    RET\n    TEXT ·g(SB), $0\n    RET\n";
        assert_eq!(norm(input), expected);
    }

    #[test]
    fn no_label_means_no_indent() {
        let input = "#define A 1\n\n\n#define B 2\n";
        assert_eq!(norm(input), "#define A 1\n\n#define B 2\n");
    }

    #[rstest]
    #[case("a\r\n\r\n\r\nTEXT x\r\nRET\r\n")]
    #[case("a\r\r\rTEXT x\rRET\r")]
    #[case("a\n\n\nTEXT x\nRET")]
    fn any_line_ending(#[case] input: &str) {
        assert_eq!(norm(input), "a\n\nTEXT x\n    RET\n");
    }

    #[test]
    fn single_blank_between_body_lines_is_indented() {
        assert_eq!(norm("TEXT x\nA\n\nB\n"), "TEXT x\n    A\n    \n    B\n");
    }

    #[test]
    fn empty_input() {
        assert_eq!(norm(""), "");
    }

    #[test]
    fn custom_dialect() {
        let dialect = AsmDialect::new("FUNC ", "\t");
        let input = "TEXT not_a_label\nFUNC main\nld r1, 0\n";
        assert_eq!(
            normalize(input, &dialect),
            "TEXT not_a_label\nFUNC main\n\tld r1, 0\n"
        );
    }

    #[rstest]
    #[case("#include \"textflag.h\"\n\n\n\nTEXT ·f(SB), $0\n  MOVQ $1, AX\n\n\n RET\n")]
    #[case("\n\n\nTEXT ·f(SB), $0\n\n\n")]
    #[case("  a  \r\n\r\n b\rTEXT c\n\td\n")]
    fn idempotent(#[case] input: &str) {
        let once = norm(input);
        assert_eq!(norm(&once), once);
    }

    #[rstest]
    #[case("\n\n\n\n")]
    #[case("a\n \n\t\n\nTEXT x\n\n  \n\nb\n\n\n")]
    fn never_two_blank_lines_in_a_row(#[case] input: &str) {
        let out = norm(input);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines
            .windows(2)
            .all(|w| !(w[0].trim().is_empty() && w[1].trim().is_empty())));
    }

    #[test]
    fn normalize_file_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("add_amd64.s");
        std::fs::write(&path, "a\n\n\nTEXT x\nRET\n").unwrap();

        normalize_file(&path, &AsmDialect::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "a\n\nTEXT x\n    RET\n");
    }

    #[cfg(unix)]
    #[test]
    fn normalize_file_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mul_amd64.s");
        std::fs::write(&path, "TEXT x\nRET\n").unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

        normalize_file(&path, &AsmDialect::default()).unwrap();

        let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);
    }

    #[test]
    fn normalize_file_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let result = normalize_file(&dir.path().join("nope.s"), &AsmDialect::default());
        assert!(result.is_err());
    }
}
