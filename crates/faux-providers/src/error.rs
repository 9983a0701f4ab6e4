//! Error types for data providers.

use faux_core::{ArgError, Locale};
use faux_random::RandomError;

/// Errors raised while building providers or running their operations.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Argument missing the expected type, unknown or out of an enumeration
    #[error(transparent)]
    Argument(#[from] ArgError),

    /// Random source rejected the request
    #[error(transparent)]
    Random(#[from] RandomError),

    /// Argument value is well-typed but not acceptable
    #[error("invalid value for '{name}': {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// Bundled dataset could not be decoded
    #[error("failed to load '{dataset}' dataset for locale '{locale}': {source}")]
    Dataset {
        locale: Locale,
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A provider with the same name is already registered
    #[error("provider '{0}' is already registered")]
    DuplicateProvider(String),
}

impl ProviderError {
    /// Shorthand for [`ProviderError::InvalidArgument`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
