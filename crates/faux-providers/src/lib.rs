//! Data providers for the fauxgen framework.
//!
//! A [`Provider`] is a named set of operations that turn a [`Random`]
//! source and keyword [`Args`] into a [`Value`]. [`Generic`] is the
//! registry the field layer resolves names against.
//!
//! # Example
//!
//! ```rust
//! use faux_core::{Args, Locale};
//! use faux_providers::Generic;
//!
//! let mut generic = Generic::new(Locale::En, 42u64).unwrap();
//! let email = generic.provider("person").unwrap().operation("email").unwrap();
//! let value = email(generic.random_mut(), &Args::new()).unwrap();
//! assert!(value.as_str().unwrap().contains('@'));
//! ```
//!
//! [`Random`]: faux_random::Random
//! [`Args`]: faux_core::Args
//! [`Value`]: faux_core::Value

pub mod address;
pub mod builtins;
pub mod data;
pub mod error;
pub mod finance;
pub mod generic;
pub mod internet;
pub mod path;
pub mod person;
pub mod provider;

pub use address::Address;
pub use builtins::{NetherlandsProvider, RussiaProvider, BUILTIN_NAMES};
pub use error::ProviderError;
pub use finance::Finance;
pub use generic::Generic;
pub use internet::Internet;
pub use path::Path;
pub use person::Person;
pub use provider::{bind, operation_names, Method, Operation, OperationSpec, Provider};
