use std::path::Path;
use std::process::Command;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("failed to launch `{program}`")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {status}")]
    Exit { program: String, status: String },
}

/// An in-place rewrite of a generated file by some external program.
pub trait SourceTool: Send + Sync {
    fn run(&self, path: &Path) -> Result<(), ToolError>;
}

/// Runs `program args... <path>`, inheriting stdout and stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandTool {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandTool {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// `gofmt -s -w`
    pub fn gofmt() -> Self {
        Self::new("gofmt", ["-s", "-w"])
    }

    /// `goimports -w`
    pub fn goimports() -> Self {
        Self::new("goimports", ["-w"])
    }
}

impl SourceTool for CommandTool {
    fn run(&self, path: &Path) -> Result<(), ToolError> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| ToolError::Launch {
                program: self.program.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(ToolError::Exit {
                program: self.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
