mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use commands::render::RenderArgs;

fn main() -> miette::Result<()> {
    match Cli::parse().command {
        Commands::Render {
            output,
            templates,
            data,
            config,
            package,
            package_doc,
            build_tag,
            generated_by,
            apache2,
            year,
            no_format,
            no_imports,
            quiet,
        } => commands::render::run(RenderArgs {
            output,
            templates,
            data,
            config,
            package,
            package_doc,
            build_tag,
            generated_by,
            apache2,
            year,
            no_format,
            no_imports,
            quiet,
        }),
        Commands::NormalizeAsm {
            files,
            label_prefix,
            indent,
        } => commands::normalize_asm::run(files, label_prefix, indent),
    }
}
