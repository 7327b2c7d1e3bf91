pub mod options;
pub mod settings;

use crate::error::Result;
use crate::format::asm::AsmDialect;
use crate::render::functions::FunctionSet;

pub use options::GenOption;
pub use settings::Settings;

/// Banner label used when no `generated_by` option is given.
pub const DEFAULT_GENERATED_BY: &str = "default";

/// Options for one generation call, fixed once [`Config::build`] returns.
#[derive(Debug, Clone)]
pub struct Config {
    pub(crate) verbose: bool,
    pub(crate) format: bool,
    pub(crate) imports: bool,
    pub(crate) package_name: String,
    pub(crate) package_doc: String,
    pub(crate) license: String,
    pub(crate) generated_by: String,
    pub(crate) build_tag: String,
    pub(crate) funcs: FunctionSet,
    pub(crate) asm_dialect: AsmDialect,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: true,
            format: true,
            imports: true,
            package_name: String::new(),
            package_doc: String::new(),
            license: String::new(),
            generated_by: DEFAULT_GENERATED_BY.to_string(),
            build_tag: String::new(),
            funcs: FunctionSet::new(),
            asm_dialect: AsmDialect::default(),
        }
    }
}

impl Config {
    /// Apply `options` in order on top of the defaults. The first invalid
    /// option aborts the build.
    pub fn build<I>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = GenOption>,
    {
        let mut config = Config::default();
        for option in options {
            option.apply(&mut config)?;
        }
        Ok(config)
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn format(&self) -> bool {
        self.format
    }

    pub fn imports(&self) -> bool {
        self.imports
    }

    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn package_doc(&self) -> &str {
        &self.package_doc
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn generated_by(&self) -> &str {
        &self.generated_by
    }

    pub fn build_tag(&self) -> &str {
        &self.build_tag
    }

    /// Caller-supplied template functions (built-ins not included).
    pub fn funcs(&self) -> &FunctionSet {
        &self.funcs
    }

    pub fn asm_dialect(&self) -> &AsmDialect {
        &self.asm_dialect
    }
}
