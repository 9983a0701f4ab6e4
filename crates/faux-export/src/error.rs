//! Error types for record export.

use thiserror::Error;

/// Errors that can occur while writing or reading back a record batch.
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// BSON encoding error.
    #[error("BSON encoding error: {0}")]
    BsonEncode(#[from] bson::ser::Error),

    /// BSON decoding error.
    #[error("BSON decoding error: {0}")]
    BsonDecode(#[from] bson::de::Error),
}
