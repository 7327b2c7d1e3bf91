#![allow(unused_assignments)]

use std::fmt;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::format::tool::ToolError;

/// The pipeline stage a generation call was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configure,
    Header,
    Render,
    Format,
    ResolveImports,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Configure => "configure",
            Stage::Header => "header",
            Stage::Render => "render",
            Stage::Format => "format",
            Stage::ResolveImports => "resolve imports",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum StampError {
    #[error("Invalid '{option}' option: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    #[error("Failed to parse settings file {path}")]
    #[diagnostic(help("Check the TOML syntax in your settings file"))]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to parse data file {path}: {reason}")]
    #[diagnostic(help("Data files are JSON, or TOML when the extension is .toml"))]
    DataParse { path: PathBuf, reason: String },

    #[error("IO error: {context}")]
    Io {
        stage: Stage,
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse template '{template}'")]
    #[diagnostic(help("Check the Tera syntax of the concatenated template fragments"))]
    TemplateSyntax {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Failed to render template '{template}'")]
    #[diagnostic(help("Check that the data provides every variable the template uses"))]
    TemplateExecution {
        template: String,
        #[source]
        source: tera::Error,
    },

    #[error("Formatting failed for {path}")]
    #[diagnostic(help("Ensure the formatter is installed and the generated code is valid"))]
    Format {
        path: PathBuf,
        #[source]
        source: ToolError,
    },

    #[error("Import resolution failed for {path}")]
    #[diagnostic(help("Ensure goimports is installed, or disable import resolution"))]
    ImportResolution {
        path: PathBuf,
        #[source]
        source: ToolError,
    },
}

impl StampError {
    /// The stage that produced this error.
    pub fn stage(&self) -> Stage {
        match self {
            StampError::InvalidOption { .. }
            | StampError::SettingsParse { .. }
            | StampError::DataParse { .. } => Stage::Configure,
            StampError::Io { stage, .. } => *stage,
            StampError::TemplateSyntax { .. } | StampError::TemplateExecution { .. } => {
                Stage::Render
            }
            StampError::Format { .. } => Stage::Format,
            StampError::ImportResolution { .. } => Stage::ResolveImports,
        }
    }
}

pub type Result<T> = std::result::Result<T, StampError>;
