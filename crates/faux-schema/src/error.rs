//! Error types for field resolution and schema evaluation.

use faux_core::ArgError;
use faux_export::ExportError;
use faux_providers::ProviderError;
use faux_random::RandomError;
use thiserror::Error;

/// Errors raised by fields, handlers and schemas.
#[derive(Error, Debug)]
pub enum FieldError {
    /// Name does not resolve to any provider operation
    #[error("field '{0}' is not supported")]
    UnknownField(String),

    /// Qualified name refers to a provider that is not registered
    #[error("provider '{provider}' is not registered (field '{field}')")]
    UnknownProvider { provider: String, field: String },

    /// Name has more than one qualification level
    #[error("field name '{0}' is ambiguous: use at most one provider qualifier, e.g. 'person.name'")]
    AmbiguousFieldName(String),

    /// No field name supplied
    #[error("a field name is required")]
    MissingFieldName,

    /// Custom handler name is not an identifier
    #[error("handler name '{0}' is not a valid identifier")]
    InvalidHandlerName(String),

    /// Repetition count below one
    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterationCount(usize),

    /// Schema definition cannot be evaluated
    #[error("invalid schema: {0}")]
    InvalidSchema(String),

    /// Failure reported by a custom handler
    #[error("handler '{name}' failed: {message}")]
    Handler { name: String, message: String },

    /// Keyword argument rejected by a custom handler
    #[error(transparent)]
    Argument(#[from] ArgError),

    /// Provider operation failed
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// Random source failed
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Export failed
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors raised while loading a schema template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Error reading template file
    #[error("Failed to read schema template: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
