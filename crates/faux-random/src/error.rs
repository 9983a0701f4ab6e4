//! Error types for the random source.

/// Errors raised by [`crate::Random`] operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RandomError {
    /// Requested amount of values is below one (or above the population)
    #[error("invalid amount {amount}: {reason}")]
    InvalidArity { amount: usize, reason: &'static str },

    /// Lower bound is greater than upper bound
    #[error("invalid range: {a} > {b}")]
    InvalidRange { a: String, b: String },

    /// Selection from an empty collection
    #[error("cannot choose from an empty collection")]
    EmptyChoices,

    /// Weights cannot form a distribution
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Letter and digit placeholders are the same character
    #[error("invalid mask: the letter placeholder and the digit placeholder must differ (both are '{0}')")]
    InvalidMask(char),

    /// Unique string generation could not find an unused value
    #[error("could not produce a unique string of length {length} after {attempts} attempts")]
    UniquenessExhausted { length: usize, attempts: usize },
}
