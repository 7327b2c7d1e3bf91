use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "stampgen",
    about = "Render templates into generated source files",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render template fragments into one output file
    Render {
        /// File to generate
        output: PathBuf,

        /// Template fragment, concatenated in the order given (repeatable)
        #[arg(short, long = "template", value_name = "FILE", required = true)]
        templates: Vec<PathBuf>,

        /// Data file (JSON, or TOML when the extension is .toml)
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Settings file; flags given on the command line override it
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Package name for the package clause
        #[arg(long)]
        package: Option<String>,

        /// Package doc text, written as `// Package <name> <doc>`
        #[arg(long, requires = "package")]
        package_doc: Option<String>,

        /// Build constraint for the `// +build` line
        #[arg(long)]
        build_tag: Option<String>,

        /// Label for the `Code generated by` banner
        #[arg(long)]
        generated_by: Option<String>,

        /// Add an Apache 2.0 header for this copyright holder
        #[arg(long, value_name = "HOLDER", requires = "year")]
        apache2: Option<String>,

        /// Copyright year for --apache2
        #[arg(long, requires = "apache2")]
        year: Option<i32>,

        /// Skip the formatter
        #[arg(long)]
        no_format: bool,

        /// Skip import resolution
        #[arg(long)]
        no_imports: bool,

        /// Do not print progress
        #[arg(short, long)]
        quiet: bool,
    },

    /// Normalize Go assembly files in place
    NormalizeAsm {
        /// Files to normalize
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Prefix of the line that starts the instruction body
        #[arg(long, default_value = "TEXT ")]
        label_prefix: String,

        /// Indent unit for the instruction body
        #[arg(long, default_value = "    ")]
        indent: String,
    },
}
