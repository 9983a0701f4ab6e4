//! Declarative schema templates loaded from YAML.
//!
//! ```yaml
//! locale: ru
//! seed: 42
//! iterations: 100
//! providers: [russia_provider]
//! fields:
//!   - key: name
//!     field: person.full_name
//!     args: { gender: female }
//!   - key: phones
//!     field: telephone
//!     repeat: 2
//! ```

use crate::error::{FieldError, TemplateError};
use crate::field::Field;
use faux_core::{Args, Locale, Record, Value};
use faux_providers::builtins;
use faux_random::Seed;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default number of records produced by a template.
pub const DEFAULT_ITERATIONS: usize = 10;

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

/// Seed as written in a template: any YAML number or string.
///
/// Numbers seed exactly like the equal Rust value passed to
/// [`Field::new`], so `seed: -5` replays `Field::new(locale, -5i64)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateSeed {
    Int(u64),
    Signed(i64),
    Float(f64),
    Text(String),
}

impl From<&TemplateSeed> for Seed {
    fn from(seed: &TemplateSeed) -> Self {
        match seed {
            TemplateSeed::Int(value) => Seed::Int(*value),
            TemplateSeed::Signed(value) => Seed::from(*value),
            TemplateSeed::Float(value) => Seed::from(*value),
            TemplateSeed::Text(text) => Seed::Text(text.clone()),
        }
    }
}

/// One output column of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldTemplate {
    /// Record key
    pub key: String,

    /// Field name, optionally qualified (`person.email`)
    pub field: String,

    /// Keyword arguments passed to the field
    #[serde(default)]
    pub args: serde_yaml::Value,

    /// Produce a list of this many values instead of a single value
    #[serde(default)]
    pub repeat: Option<usize>,
}

/// A record layout plus generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaTemplate {
    #[serde(default)]
    pub locale: Locale,

    /// Absent means non-deterministic output
    #[serde(default)]
    pub seed: Option<TemplateSeed>,

    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Country-specific providers to register, by name
    #[serde(default)]
    pub providers: Vec<String>,

    pub fields: Vec<FieldTemplate>,
}

impl SchemaTemplate {
    /// Load a template from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TemplateError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse a template from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, TemplateError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn seed(&self) -> Seed {
        self.seed.as_ref().map(Seed::from).unwrap_or_default()
    }

    /// Check the template without evaluating any field.
    ///
    /// Field names are only resolved when records are produced.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.iterations < 1 {
            return Err(FieldError::InvalidIterationCount(self.iterations));
        }
        if self.fields.is_empty() {
            return Err(FieldError::InvalidSchema("template declares no fields".to_string()));
        }
        for name in &self.providers {
            if !builtins::BUILTIN_NAMES.contains(&name.as_str()) {
                return Err(FieldError::InvalidSchema(format!(
                    "unknown provider '{name}', expected one of: {}",
                    builtins::BUILTIN_NAMES.join(", ")
                )));
            }
        }

        let mut keys = HashSet::new();
        for field in &self.fields {
            if !keys.insert(field.key.as_str()) {
                return Err(FieldError::InvalidSchema(format!("duplicate key '{}'", field.key)));
            }
            if field.field.trim().is_empty() {
                return Err(FieldError::MissingFieldName);
            }
            if field.repeat == Some(0) {
                return Err(FieldError::InvalidIterationCount(0));
            }
            if !(field.args.is_mapping() || field.args.is_null()) {
                return Err(FieldError::InvalidSchema(format!(
                    "args of '{}' must be a mapping",
                    field.key
                )));
            }
        }
        Ok(())
    }

    /// Build a [`Field`] configured with this template's locale, seed and
    /// providers.
    pub fn field(&self) -> Result<Field, FieldError> {
        self.validate()?;
        let mut field = Field::new(self.locale, self.seed())?;
        for name in &self.providers {
            if let Some(provider) = builtins::by_name(name)? {
                field.add_provider(provider)?;
            }
        }
        Ok(field)
    }

    /// Pair each column with its parsed arguments.
    pub(crate) fn columns(&self) -> Vec<Column> {
        self.fields
            .iter()
            .map(|field| Column {
                key: field.key.clone(),
                field: field.field.clone(),
                args: Args::from_yaml_mapping(&field.args),
                repeat: field.repeat,
            })
            .collect()
    }
}

/// A template field ready for evaluation.
#[derive(Debug, Clone)]
pub(crate) struct Column {
    key: String,
    field: String,
    args: Args,
    repeat: Option<usize>,
}

/// Produce one record from the columns of a template.
pub(crate) fn produce(field: &mut Field, columns: &[Column]) -> Result<Record, FieldError> {
    let mut record = Record::new();
    for column in columns {
        let value = match column.repeat {
            Some(times) => Value::List(
                (0..times)
                    .map(|_| field.perform(&column.field, None, &column.args))
                    .collect::<Result<_, _>>()?,
            ),
            None => field.perform(&column.field, None, &column.args)?,
        };
        record.insert(column.key.clone(), value);
    }
    Ok(record)
}
