//! Field resolution, custom handlers and schema evaluation for fauxgen.
//!
//! # Architecture
//!
//! ```text
//!   Schema (producer x iterations)
//!        │
//!        ▼
//!   Field / Fieldset ── perform(name, key, args)
//!        │
//!        ├── HandlerTable   custom handlers, checked first
//!        └── FieldResolver  name → provider operation, cached
//!                 │
//!                 ▼
//!           Generic (providers + Random)
//! ```
//!
//! # Example
//!
//! ```rust
//! use faux_core::{Args, Locale, Record, Value};
//! use faux_random::Random;
//! use faux_schema::{Field, Schema};
//!
//! let mut field = Field::new(Locale::En, 7u64).unwrap();
//! field
//!     .register_handler("plan", |random: &mut Random, _args: &Args| {
//!         Ok(Value::from(*random.choice(&["free", "pro", "team"])?))
//!     })
//!     .unwrap();
//!
//! let mut schema = Schema::new(
//!     move || {
//!         Ok(Record::new()
//!             .with("user", field.call("username")?)
//!             .with("plan", field.call("plan")?))
//!     },
//!     3,
//! )
//! .unwrap();
//!
//! for record in schema.create().unwrap() {
//!     assert!(["free", "pro", "team"].contains(&record.get("plan").unwrap().as_str().unwrap()));
//! }
//! ```

pub mod error;
pub mod field;
pub mod handlers;
pub mod key;
pub mod resolver;
pub mod schema;
pub mod template;

pub use error::{FieldError, TemplateError};
pub use field::{BaseField, Field, Fieldset, DEFAULT_FIELDSET_ITERATIONS};
pub use handlers::{is_identifier, Handler, HandlerTable};
pub use key::Key;
pub use resolver::{parse_field_name, FieldName, FieldResolver};
pub use schema::Schema;
pub use template::{FieldTemplate, SchemaTemplate, TemplateSeed, DEFAULT_ITERATIONS};
