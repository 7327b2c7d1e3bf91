use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use tera::{Tera, Value};

/// A callable exposed to templates as `{{ name(arg=...) }}`.
pub type TemplateFn = Arc<dyn Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync>;

/// Named template functions. Inserting an existing name replaces it.
#[derive(Clone, Default)]
pub struct FunctionSet {
    funcs: BTreeMap<String, TemplateFn>,
}

impl FunctionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`FunctionSet::insert`].
    pub fn with<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync + 'static,
    {
        self.insert(name, func);
        self
    }

    pub fn insert<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&HashMap<String, Value>) -> tera::Result<Value> + Send + Sync + 'static,
    {
        self.funcs.insert(name.into(), Arc::new(func));
    }

    /// Merge `other` into `self`; functions from `other` win on name clashes.
    pub fn merge(&mut self, other: &FunctionSet) {
        for (name, func) in &other.funcs {
            self.funcs.insert(name.clone(), Arc::clone(func));
        }
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.funcs.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Register every function on a Tera instance.
    pub(crate) fn register(&self, tera: &mut Tera) {
        for (name, func) in &self.funcs {
            let func = Arc::clone(func);
            tera.register_function(name, move |args: &HashMap<String, Value>| func(args));
        }
    }
}

impl fmt::Debug for FunctionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.funcs.keys()).finish()
    }
}

/// Functions available to every template unless a caller overrides them.
pub fn builtin_functions() -> FunctionSet {
    FunctionSet::new()
        .with("iterate", iterate)
        .with("sup_scr", sup_scr)
        .with("pretty", pretty)
}

fn int_arg(args: &HashMap<String, Value>, fn_name: &str, arg: &str) -> tera::Result<i64> {
    let value = args
        .get(arg)
        .ok_or_else(|| tera::Error::msg(format!("`{fn_name}` requires an `{arg}` argument")))?;
    value.as_i64().ok_or_else(|| {
        tera::Error::msg(format!(
            "`{fn_name}` argument `{arg}` must be an integer, got {value}"
        ))
    })
}

/// `iterate(start=a, end=b)` yields `[a, a+1, ..., b-1]`.
fn iterate(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let start = int_arg(args, "iterate", "start")?;
    let end = int_arg(args, "iterate", "end")?;
    Ok(Value::Array((start..end).map(Value::from).collect()))
}

/// `sup_scr(n=12)` yields `"¹²"`.
fn sup_scr(args: &HashMap<String, Value>) -> tera::Result<Value> {
    const DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

    let n = int_arg(args, "sup_scr", "n")?;
    let mut out = String::new();
    if n < 0 {
        out.push('⁻');
    }
    for c in n.unsigned_abs().to_string().chars() {
        if let Some(d) = c.to_digit(10) {
            out.push(DIGITS[d as usize]);
        }
    }
    Ok(Value::String(out))
}

fn pretty(args: &HashMap<String, Value>) -> tera::Result<Value> {
    let value = args
        .get("value")
        .ok_or_else(|| tera::Error::msg("`pretty` requires a `value` argument"))?;
    serde_json::to_string_pretty(value)
        .map(Value::String)
        .map_err(|e| tera::Error::msg(format!("`pretty` could not serialize value: {e}")))
}
