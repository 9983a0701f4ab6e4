//! Core types for the fauxgen framework.
//!
//! This crate provides the foundational types shared by every other
//! fauxgen crate:
//!
//! - [`Value`] - A generated value (scalar, list or nested record)
//! - [`Record`] - An insertion-ordered mapping of keys to values
//! - [`Args`] - Keyword arguments passed to provider operations
//! - [`Locale`] - Locale selector for locale-aware datasets
//! - [`Enumerable`] enums used as typed operation arguments
//!
//! # Architecture
//!
//! ```text
//! faux-core (this crate)
//!    │
//!    ├─── faux-random     (seedable random source)
//!    ├─── faux-providers  (data providers, produce Values)
//!    ├─── faux-schema     (field resolution, builds Records)
//!    └─── faux-export     (CSV / JSON / BSON writers for Records)
//! ```
//!
//! # Example
//!
//! ```rust
//! use faux_core::{Record, Value};
//!
//! let record = Record::new()
//!     .with("name", "Ada")
//!     .with("age", 36);
//!
//! assert_eq!(record.keys().collect::<Vec<_>>(), vec!["name", "age"]);
//! assert_eq!(record.get("age"), Some(&Value::Int(36)));
//! ```

pub mod args;
pub mod enums;
pub mod locale;
pub mod record;
pub mod value;

// Re-exports for convenience
pub use args::{ArgError, Args};
pub use enums::{
    Enumerable, Gender, MimeType, NonEnumerableError, Platform, PortRange, TitleType, TldType,
    UrlScheme,
};
pub use locale::Locale;
pub use record::Record;
pub use value::Value;
