//! Render templates into a single generated source file.
//!
//! A generation call writes a standard header (build constraint, license,
//! `DO NOT EDIT` banner, package clause), renders the concatenated template
//! fragments against caller data, then post-formats the file and optionally
//! resolves its imports.

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod license;
pub mod render;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use console::style;
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::format::{post_format, CommandTool, OutputSyntax, SourceTool};
use crate::render::{aggregate, write_header, Engine};

pub use crate::config::{GenOption, Settings};
pub use crate::error::{Stage, StampError};
pub use crate::render::FunctionSet;

/// Runs the render pipeline with a given formatter and import resolver.
pub struct Generator {
    formatter: Box<dyn SourceTool>,
    import_resolver: Box<dyn SourceTool>,
}

impl Default for Generator {
    fn default() -> Self {
        Self {
            formatter: Box::new(CommandTool::gofmt()),
            import_resolver: Box::new(CommandTool::goimports()),
        }
    }
}

impl Generator {
    /// A generator using `gofmt -s -w` and `goimports -w`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_formatter(mut self, tool: impl SourceTool + 'static) -> Self {
        self.formatter = Box::new(tool);
        self
    }

    pub fn with_import_resolver(mut self, tool: impl SourceTool + 'static) -> Self {
        self.import_resolver = Box::new(tool);
        self
    }

    /// Render `fragments` against `data` into `output`.
    ///
    /// Stages run in order and the first failure is returned; the file keeps
    /// whatever the last successful stage wrote.
    pub fn generate<S, T, I>(
        &self,
        output: impl AsRef<Path>,
        fragments: &[S],
        data: &T,
        options: I,
    ) -> Result<()>
    where
        S: AsRef<str>,
        T: Serialize + ?Sized,
        I: IntoIterator<Item = GenOption>,
    {
        let output = output.as_ref();
        let config = Config::build(options)?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| StampError::Io {
                stage: Stage::Header,
                context: format!("creating output directory {}", parent.display()),
                source: e,
            })?;
        }

        let file = File::create(output).map_err(|e| StampError::Io {
            stage: Stage::Header,
            context: format!("creating output file {}", output.display()),
            source: e,
        })?;

        if config.verbose() {
            println!("{} {}", style("generating").green().bold(), output.display());
        }

        let mut writer = BufWriter::new(file);
        write_header(&mut writer, &config)
            .and_then(|()| writer.flush())
            .map_err(|e| StampError::Io {
                stage: Stage::Header,
                context: format!("writing header to {}", output.display()),
                source: e,
            })?;

        let name = output.display().to_string();
        let engine = Engine::parse(&name, &aggregate(fragments), config.funcs())?;
        let body = engine.render(data)?;
        writer
            .write_all(body.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| StampError::Io {
                stage: Stage::Render,
                context: format!("writing rendered output to {}", output.display()),
                source: e,
            })?;
        drop(writer);

        if config.format() {
            post_format(
                output,
                OutputSyntax::from_path(output),
                self.formatter.as_ref(),
                config.asm_dialect(),
            )?;
        }

        if config.imports() {
            self.import_resolver
                .run(output)
                .map_err(|e| StampError::ImportResolution {
                    path: output.to_path_buf(),
                    source: e,
                })?;
        }

        Ok(())
    }
}

/// Render `fragments` against `data` into `output` with the default tools.
pub fn generate<S, T, I>(
    output: impl AsRef<Path>,
    fragments: &[S],
    data: &T,
    options: I,
) -> Result<()>
where
    S: AsRef<str>,
    T: Serialize + ?Sized,
    I: IntoIterator<Item = GenOption>,
{
    Generator::new().generate(output, fragments, data, options)
}
