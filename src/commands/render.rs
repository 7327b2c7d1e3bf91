use std::path::PathBuf;

use console::style;
use miette::Result;
use serde_json::Value;

use stampgen::input::{load_data, load_fragments};
use stampgen::{GenOption, Settings};

pub struct RenderArgs {
    pub output: PathBuf,
    pub templates: Vec<PathBuf>,
    pub data: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub package: Option<String>,
    pub package_doc: Option<String>,
    pub build_tag: Option<String>,
    pub generated_by: Option<String>,
    pub apache2: Option<String>,
    pub year: Option<i32>,
    pub no_format: bool,
    pub no_imports: bool,
    pub quiet: bool,
}

impl RenderArgs {
    /// Settings-file options first, then command-line flags.
    fn options(&self) -> stampgen::error::Result<Vec<GenOption>> {
        let mut options = match &self.config {
            Some(path) => Settings::load(path)?.into_options()?,
            None => Vec::new(),
        };

        if let Some(name) = &self.package {
            options.push(GenOption::Package {
                name: name.clone(),
                doc: self.package_doc.clone(),
            });
        }
        if let Some(tag) = &self.build_tag {
            options.push(GenOption::build_tag(tag.clone()));
        }
        if let Some(label) = &self.generated_by {
            options.push(GenOption::generated_by(label.clone()));
        }
        if let (Some(holder), Some(year)) = (&self.apache2, self.year) {
            options.push(GenOption::apache2(holder, year));
        }
        if self.no_format {
            options.push(GenOption::format(false));
        }
        if self.no_imports {
            options.push(GenOption::imports(false));
        }
        if self.quiet {
            options.push(GenOption::verbose(false));
        }

        Ok(options)
    }
}

pub fn run(args: RenderArgs) -> Result<()> {
    let options = args.options()?;
    let fragments = load_fragments(&args.templates)?;
    let data = match &args.data {
        Some(path) => load_data(path)?,
        None => Value::Object(Default::default()),
    };

    stampgen::generate(&args.output, &fragments, &data, options)?;

    if !args.quiet {
        println!(
            "{} Generated {} from {} template(s)",
            style("✓").green().bold(),
            style(args.output.display()).cyan(),
            args.templates.len()
        );
    }

    Ok(())
}
