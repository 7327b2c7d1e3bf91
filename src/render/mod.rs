pub mod engine;
pub mod functions;
pub mod header;

pub use engine::{aggregate, Engine};
pub use functions::{builtin_functions, FunctionSet, TemplateFn};
pub use header::{banner, write_header};
