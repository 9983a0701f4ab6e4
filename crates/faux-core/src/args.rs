//! Keyword arguments for provider operations and custom handlers.
//!
//! Arguments are untyped on the way in (they may come from Rust code, a
//! YAML template or the command line) and typed on the way out: each
//! accessor returns `Ok(None)` when the argument is absent or null, and
//! an [`ArgError`] when it is present with the wrong shape.

use crate::enums::{Enumerable, NonEnumerableError};
use crate::record::Record;
use crate::value::Value;
use serde_yaml::Value as YamlValue;

/// Error type for argument access.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgError {
    /// Argument present with an unexpected type
    #[error("argument '{name}' must be {expected}, got {actual}")]
    WrongType {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Argument not accepted by the operation
    #[error("operation '{operation}' does not accept argument '{name}'")]
    Unexpected { operation: String, name: String },

    /// Argument names a value outside an enumeration
    #[error("argument '{name}': {source}")]
    NonEnumerable {
        name: String,
        #[source]
        source: NonEnumerableError,
    },
}

/// Ordered keyword arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    values: Record,
}

impl Args {
    /// Create an empty argument set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Set an argument.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name, value);
    }

    /// Build arguments from a YAML mapping (non-mappings yield no arguments).
    pub fn from_yaml_mapping(yaml: &YamlValue) -> Self {
        match Value::from_yaml(yaml) {
            Value::Map(values) => Self { values },
            _ => Self::default(),
        }
    }

    /// Raw access to an argument; null counts as absent.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).filter(|v| !v.is_null())
    }

    /// Argument names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys()
    }

    /// Whether no arguments are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Reject argument names outside `accepted`.
    pub fn ensure_known(&self, operation: &str, accepted: &[&str]) -> Result<(), ArgError> {
        match self.names().find(|name| !accepted.contains(name)) {
            Some(name) => Err(ArgError::Unexpected {
                operation: operation.to_string(),
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// Text argument.
    pub fn str(&self, name: &str) -> Result<Option<&str>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Text(s)) => Ok(Some(s)),
            Some(other) => Err(wrong_type(name, "text", other)),
        }
    }

    /// Integer argument.
    pub fn i64(&self, name: &str) -> Result<Option<i64>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Int(i)) => Ok(Some(*i)),
            Some(other) => Err(wrong_type(name, "an integer", other)),
        }
    }

    /// Non-negative integer argument.
    pub fn usize(&self, name: &str) -> Result<Option<usize>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Int(i)) => usize::try_from(*i)
                .map(Some)
                .map_err(|_| wrong_type(name, "a non-negative integer", &Value::Int(*i))),
            Some(other) => Err(wrong_type(name, "a non-negative integer", other)),
        }
    }

    /// Float argument; integers are widened.
    pub fn f64(&self, name: &str) -> Result<Option<f64>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => value
                .as_f64()
                .map(Some)
                .ok_or_else(|| wrong_type(name, "a number", value)),
        }
    }

    /// Boolean argument.
    pub fn bool(&self, name: &str) -> Result<Option<bool>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(wrong_type(name, "a boolean", other)),
        }
    }

    /// List-of-text argument; a single text value counts as a one-item list.
    pub fn str_list(&self, name: &str) -> Result<Option<Vec<String>>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::Text(s)) => Ok(Some(vec![s.clone()])),
            Some(Value::List(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Text(s) => Ok(s.clone()),
                    other => Err(wrong_type(name, "a list of text", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(wrong_type(name, "a list of text", other)),
        }
    }

    /// List-of-integer argument.
    pub fn i64_list(&self, name: &str) -> Result<Option<Vec<i64>>, ArgError> {
        match self.get(name) {
            None => Ok(None),
            Some(Value::List(items)) => items
                .iter()
                .map(|item| match item {
                    Value::Int(i) => Ok(*i),
                    other => Err(wrong_type(name, "a list of integers", other)),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Some),
            Some(other) => Err(wrong_type(name, "a list of integers", other)),
        }
    }

    /// Enumeration argument given by its canonical name.
    pub fn enumeration<E: Enumerable>(&self, name: &str) -> Result<Option<E>, ArgError> {
        match self.str(name)? {
            None => Ok(None),
            Some(text) => E::parse(text)
                .map(Some)
                .map_err(|source| ArgError::NonEnumerable {
                    name: name.to_string(),
                    source,
                }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Args {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

fn wrong_type(name: &str, expected: &'static str, actual: &Value) -> ArgError {
    ArgError::WrongType {
        name: name.to_string(),
        expected,
        actual: actual.kind(),
    }
}
