//! fauxgen
//!
//! A library for generating localized fake data: names, addresses,
//! internet identifiers, financial values and more, assembled into
//! records and written out as CSV, JSON or BSON.
//!
//! # Crates
//!
//! - [`faux_core`] - `Value`, `Record`, `Args`, `Locale` and argument enums
//! - [`faux_random`] - the seedable random source
//! - [`faux_providers`] - data providers and the `Generic` registry
//! - [`faux_schema`] - field resolution, custom handlers, `Field`, `Fieldset`, `Schema`
//! - [`faux_export`] - CSV, JSON and BSON writers
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 100 records from a template as CSV
//! fauxgen generate --schema people.yaml --format csv --output people.csv --iterations 100
//!
//! # Print five Russian surnames
//! fauxgen field surname --count 5 --locale ru --seed 42
//!
//! # Call a country-specific operation with arguments
//! fauxgen field passport_series --with russia_provider --arg year=18
//!
//! # List providers and their operations
//! fauxgen providers
//! ```

pub mod cli;

pub use faux_core;
pub use faux_export;
pub use faux_providers;
pub use faux_random;
pub use faux_schema;

pub use faux_core::{Args, Locale, Record, Value};
pub use faux_export::ExportFormat;
pub use faux_providers::{Generic, Provider};
pub use faux_random::{Random, Seed};
pub use faux_schema::{Field, FieldError, Fieldset, Key, Schema, SchemaTemplate};
