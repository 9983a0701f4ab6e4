//! The provider capability interface.
//!
//! A provider is a named object exposing named operations. Callers never
//! inspect concrete provider types: they ask for an operation by name and
//! get back an [`Operation`], a shareable callable that can be stored
//! (the field resolver caches them) and invoked any number of times.
//!
//! Concrete providers describe their operations with a static table of
//! [`OperationSpec`]s and implement [`Provider::operation`] with [`bind`]:
//!
//! ```rust
//! use faux_core::{Args, Value};
//! use faux_providers::{bind, operation_names, Operation, OperationSpec, Provider, ProviderError};
//! use faux_random::Random;
//!
//! #[derive(Clone)]
//! struct Dice;
//!
//! impl Dice {
//!     fn roll(&self, random: &mut Random, args: &Args) -> Result<Value, ProviderError> {
//!         let sides = args.i64("sides")?.unwrap_or(6);
//!         Ok(Value::Int(random.randint(1, sides)?))
//!     }
//! }
//!
//! static DICE_OPERATIONS: &[OperationSpec<Dice>] = &[OperationSpec {
//!     name: "roll",
//!     params: &["sides"],
//!     method: Dice::roll,
//! }];
//!
//! impl Provider for Dice {
//!     fn name(&self) -> &str {
//!         "dice"
//!     }
//!
//!     fn operations(&self) -> Vec<&'static str> {
//!         operation_names(DICE_OPERATIONS)
//!     }
//!
//!     fn operation(&self, name: &str) -> Option<Operation> {
//!         bind(self, DICE_OPERATIONS, name)
//!     }
//! }
//!
//! let roll = Dice.operation("roll").unwrap();
//! let value = roll(&mut Random::new(1u64), &Args::new()).unwrap();
//! assert!((1..=6).contains(&value.as_i64().unwrap()));
//! ```

use crate::error::ProviderError;
use faux_core::{Args, Value};
use faux_random::Random;
use std::sync::Arc;

/// A bound, callable provider operation.
pub type Operation = Arc<dyn Fn(&mut Random, &Args) -> Result<Value, ProviderError> + Send + Sync>;

/// Method signature used in operation tables.
pub type Method<P> = fn(&P, &mut Random, &Args) -> Result<Value, ProviderError>;

/// Something that exposes named data-generating operations.
pub trait Provider: Send + Sync {
    /// Identity used for qualified lookups (`provider.operation`).
    fn name(&self) -> &str;

    /// Names of every public operation, in declaration order.
    fn operations(&self) -> Vec<&'static str>;

    /// Bind an operation by name.
    fn operation(&self, name: &str) -> Option<Operation>;
}

/// One row of a provider's operation table.
pub struct OperationSpec<P: 'static> {
    /// Operation name
    pub name: &'static str,
    /// Accepted keyword arguments
    pub params: &'static [&'static str],
    /// Implementation
    pub method: Method<P>,
}

/// Bind an entry of `table` to a clone of `provider`.
///
/// The returned operation rejects keyword arguments the entry does not
/// declare before running the method.
pub fn bind<P>(provider: &P, table: &'static [OperationSpec<P>], name: &str) -> Option<Operation>
where
    P: Clone + Send + Sync + 'static,
{
    let spec = table.iter().find(|spec| spec.name == name)?;
    let (op_name, params, method) = (spec.name, spec.params, spec.method);
    let provider = provider.clone();
    Some(Arc::new(move |random: &mut Random, args: &Args| {
        args.ensure_known(op_name, params)?;
        method(&provider, random, args)
    }))
}

/// Names declared in an operation table.
pub fn operation_names<P>(table: &[OperationSpec<P>]) -> Vec<&'static str> {
    table.iter().map(|spec| spec.name).collect()
}
