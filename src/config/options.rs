use std::sync::OnceLock;

use regex_lite::Regex;

use super::Config;
use crate::error::{Result, StampError};
use crate::format::asm::AsmDialect;
use crate::license::apache2_header;
use crate::render::functions::FunctionSet;

/// A single change to a [`Config`]. Options are applied left to right and a
/// later option overwrites the fields an earlier one set.
#[derive(Debug, Clone)]
pub enum GenOption {
    License(String),
    GeneratedBy(String),
    BuildTag(String),
    Package { name: String, doc: Option<String> },
    Verbose(bool),
    Format(bool),
    Imports(bool),
    Funcs(FunctionSet),
    AsmDialect(AsmDialect),
}

impl GenOption {
    /// Apache 2.0 license header for `holder`, copyright `year`.
    pub fn apache2(holder: &str, year: i32) -> Self {
        GenOption::License(apache2_header(holder, year))
    }

    /// License text written verbatim before the banner.
    pub fn license(text: impl Into<String>) -> Self {
        GenOption::License(text.into())
    }

    pub fn generated_by(label: impl Into<String>) -> Self {
        GenOption::GeneratedBy(label.into())
    }

    pub fn build_tag(tag: impl Into<String>) -> Self {
        GenOption::BuildTag(tag.into())
    }

    /// Package declaration without a doc comment.
    pub fn package(name: impl Into<String>) -> Self {
        GenOption::Package {
            name: name.into(),
            doc: None,
        }
    }

    /// Package declaration preceded by `// Package {name} {doc}`.
    pub fn package_with_doc(name: impl Into<String>, doc: impl Into<String>) -> Self {
        GenOption::Package {
            name: name.into(),
            doc: Some(doc.into()),
        }
    }

    pub fn verbose(on: bool) -> Self {
        GenOption::Verbose(on)
    }

    pub fn format(on: bool) -> Self {
        GenOption::Format(on)
    }

    pub fn imports(on: bool) -> Self {
        GenOption::Imports(on)
    }

    pub fn funcs(funcs: FunctionSet) -> Self {
        GenOption::Funcs(funcs)
    }

    pub fn asm_dialect(label_prefix: impl Into<String>, indent: impl Into<String>) -> Self {
        GenOption::AsmDialect(AsmDialect::new(label_prefix, indent))
    }

    pub(crate) fn apply(self, config: &mut Config) -> Result<()> {
        match self {
            GenOption::License(text) => config.license = text,
            GenOption::GeneratedBy(label) => {
                if label.trim().is_empty() {
                    return Err(invalid("generated_by", "label must not be empty"));
                }
                single_line("generated_by", &label)?;
                config.generated_by = label;
            }
            GenOption::BuildTag(tag) => {
                single_line("build_tag", &tag)?;
                config.build_tag = tag;
            }
            GenOption::Package { name, doc } => {
                if !identifier_re().is_match(&name) {
                    return Err(invalid(
                        "package",
                        format!("'{name}' is not a valid package name"),
                    ));
                }
                let doc = doc.unwrap_or_default();
                single_line("package", &doc)?;
                config.package_name = name;
                config.package_doc = doc;
            }
            GenOption::Verbose(on) => config.verbose = on,
            GenOption::Format(on) => config.format = on,
            GenOption::Imports(on) => config.imports = on,
            GenOption::Funcs(funcs) => config.funcs.merge(&funcs),
            GenOption::AsmDialect(dialect) => {
                if dialect.label_prefix.is_empty() || dialect.indent.is_empty() {
                    return Err(invalid(
                        "asm_dialect",
                        "label prefix and indent must not be empty",
                    ));
                }
                single_line("asm_dialect", &dialect.label_prefix)?;
                single_line("asm_dialect", &dialect.indent)?;
                config.asm_dialect = dialect;
            }
        }
        Ok(())
    }
}

fn identifier_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"))
}

fn single_line(option: &'static str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        return Err(invalid(option, "value must fit on a single line"));
    }
    Ok(())
}

fn invalid(option: &'static str, reason: impl Into<String>) -> StampError {
    StampError::InvalidOption {
        option,
        reason: reason.into(),
    }
}
