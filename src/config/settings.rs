use std::path::Path;

use serde::Deserialize;

use super::GenOption;
use crate::error::{Result, Stage, StampError};

/// Generation options read from a TOML settings file.
///
/// Every field is optional; an absent field leaves the default in place.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    pub verbose: Option<bool>,
    pub format: Option<bool>,
    pub imports: Option<bool>,
    pub generated_by: Option<String>,
    pub build_tag: Option<String>,
    pub package: Option<PackageSettings>,
    pub license: Option<LicenseSettings>,
    pub asm: Option<AsmSettings>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageSettings {
    pub name: String,
    pub doc: Option<String>,
}

/// Either verbatim `text`, or `holder` + `year` for the Apache 2.0 header.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LicenseSettings {
    pub text: Option<String>,
    pub holder: Option<String>,
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AsmSettings {
    #[serde(default = "default_label_prefix")]
    pub label_prefix: String,
    #[serde(default = "default_indent")]
    pub indent: String,
}

fn default_label_prefix() -> String {
    crate::format::asm::DEFAULT_LABEL_PREFIX.to_string()
}

fn default_indent() -> String {
    crate::format::asm::DEFAULT_INDENT.to_string()
}

impl Settings {
    /// Read and parse a settings file.
    pub fn load(path: &Path) -> Result<Settings> {
        let content = std::fs::read_to_string(path).map_err(|e| StampError::Io {
            stage: Stage::Configure,
            context: format!("reading settings {}", path.display()),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| StampError::SettingsParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Convert into options, in field declaration order.
    pub fn into_options(self) -> Result<Vec<GenOption>> {
        let mut options = Vec::new();

        if let Some(on) = self.verbose {
            options.push(GenOption::verbose(on));
        }
        if let Some(on) = self.format {
            options.push(GenOption::format(on));
        }
        if let Some(on) = self.imports {
            options.push(GenOption::imports(on));
        }
        if let Some(label) = self.generated_by {
            options.push(GenOption::generated_by(label));
        }
        if let Some(tag) = self.build_tag {
            options.push(GenOption::build_tag(tag));
        }
        if let Some(pkg) = self.package {
            options.push(GenOption::Package {
                name: pkg.name,
                doc: pkg.doc,
            });
        }
        if let Some(license) = self.license {
            options.push(license.into_option()?);
        }
        if let Some(asm) = self.asm {
            options.push(GenOption::asm_dialect(asm.label_prefix, asm.indent));
        }

        Ok(options)
    }
}

impl LicenseSettings {
    fn into_option(self) -> Result<GenOption> {
        match (self.text, self.holder, self.year) {
            (Some(text), None, None) => Ok(GenOption::license(text)),
            (None, Some(holder), Some(year)) => Ok(GenOption::apache2(&holder, year)),
            _ => Err(StampError::InvalidOption {
                option: "license",
                reason: "set either `text`, or both `holder` and `year`".into(),
            }),
        }
    }
}
