use serde::Serialize;
use tera::{Context, Tera};

use crate::error::{Result, StampError};
use crate::render::functions::{builtin_functions, FunctionSet};

/// Concatenate template fragments in order, with nothing in between.
pub fn aggregate<S: AsRef<str>>(fragments: &[S]) -> String {
    let mut source = String::with_capacity(fragments.iter().map(|f| f.as_ref().len()).sum());
    for fragment in fragments {
        source.push_str(fragment.as_ref());
    }
    source
}

/// A parsed template with the built-in and caller functions registered.
pub struct Engine {
    tera: Tera,
    name: String,
}

impl Engine {
    /// Parse `source` under `name`. Caller functions replace built-ins of the
    /// same name.
    pub fn parse(name: &str, source: &str, funcs: &FunctionSet) -> Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        let mut all = builtin_functions();
        all.merge(funcs);
        all.register(&mut tera);

        tera.add_raw_template(name, source)
            .map_err(|e| StampError::TemplateSyntax {
                template: name.to_string(),
                source: e,
            })?;

        Ok(Self {
            tera,
            name: name.to_string(),
        })
    }

    /// Execute against `data`, which must serialize to a map.
    pub fn render<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let context = Context::from_serialize(data).map_err(|e| self.execution_error(e))?;
        self.tera
            .render(&self.name, &context)
            .map_err(|e| self.execution_error(e))
    }

    fn execution_error(&self, source: tera::Error) -> StampError {
        StampError::TemplateExecution {
            template: self.name.clone(),
            source,
        }
    }
}
