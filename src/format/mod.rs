pub mod asm;
pub mod tool;

use std::path::Path;

use crate::error::{Result, Stage, StampError};

pub use asm::AsmDialect;
pub use tool::{CommandTool, SourceTool, ToolError};

/// How a generated file is post-formatted, decided by its extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSyntax {
    /// Go source, handed to the external formatter.
    General,
    /// Go assembly, handled by the built-in normalizer.
    Assembly,
    /// Anything else; left as rendered.
    Unformatted,
}

impl OutputSyntax {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("go") => OutputSyntax::General,
            Some("s") => OutputSyntax::Assembly,
            _ => OutputSyntax::Unformatted,
        }
    }
}

/// Run the formatting strategy for `syntax` on the file at `path`.
pub fn post_format(
    path: &Path,
    syntax: OutputSyntax,
    formatter: &dyn SourceTool,
    dialect: &AsmDialect,
) -> Result<()> {
    match syntax {
        OutputSyntax::General => formatter.run(path).map_err(|e| StampError::Format {
            path: path.to_path_buf(),
            source: e,
        }),
        OutputSyntax::Assembly => {
            asm::normalize_file(path, dialect).map_err(|e| StampError::Io {
                stage: Stage::Format,
                context: format!("normalizing assembly {}", path.display()),
                source: e,
            })
        }
        OutputSyntax::Unformatted => Ok(()),
    }
}
