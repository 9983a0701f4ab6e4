//! Field invocation: single values ([`Field`]) and repeated values
//! ([`Fieldset`]).

use crate::error::FieldError;
use crate::handlers::{Handler, HandlerTable};
use crate::key::Key;
use crate::resolver::{parse_field_name, FieldResolver};
use faux_core::{Args, Locale, Value};
use faux_providers::{Generic, Provider};
use faux_random::{Random, Seed};
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tracing::debug;

/// Default number of values produced by a [`Fieldset`] call.
pub const DEFAULT_FIELDSET_ITERATIONS: usize = 10;

/// Shared machinery behind [`Field`] and [`Fieldset`].
///
/// Owns the provider registry (and with it the random source), the
/// resolution cache and the custom handler table.
#[derive(Debug)]
pub struct BaseField {
    generic: Generic,
    resolver: FieldResolver,
    handlers: HandlerTable,
}

impl BaseField {
    pub fn new(locale: Locale, seed: impl Into<Seed>) -> Result<Self, FieldError> {
        Ok(Self::from_generic(Generic::new(locale, seed)?))
    }

    pub fn from_generic(generic: Generic) -> Self {
        Self {
            generic,
            resolver: FieldResolver::new(),
            handlers: HandlerTable::new(),
        }
    }

    pub fn locale(&self) -> Locale {
        self.generic.locale()
    }

    /// Reseed the random source. Cached bindings stay valid.
    pub fn reseed(&mut self, seed: impl Into<Seed>) {
        self.generic.reseed(seed);
    }

    pub fn random(&self) -> &Random {
        self.generic.random()
    }

    pub fn random_mut(&mut self) -> &mut Random {
        self.generic.random_mut()
    }

    pub fn generic(&self) -> &Generic {
        &self.generic
    }

    /// Add a provider to the registry; it is visible to later resolutions.
    pub fn add_provider(&mut self, provider: Arc<dyn Provider>) -> Result<(), FieldError> {
        self.generic.add_provider(provider)?;
        Ok(())
    }

    pub fn register_handler<F>(&mut self, name: &str, handler: F) -> Result<bool, FieldError>
    where
        F: Fn(&mut Random, &Args) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        self.handlers.register(name, handler)
    }

    pub fn register_handlers<I, S>(&mut self, handlers: I) -> Result<usize, FieldError>
    where
        I: IntoIterator<Item = (S, Handler)>,
        S: AsRef<str>,
    {
        self.handlers.register_many(handlers)
    }

    pub fn unregister_handler(&mut self, name: &str) -> bool {
        self.handlers.unregister(name)
    }

    pub fn unregister_handlers<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.handlers.unregister_many(names)
    }

    pub fn unregister_all_handlers(&mut self) {
        self.handlers.unregister_all();
    }

    pub fn handlers(&self) -> &HandlerTable {
        &self.handlers
    }

    pub fn resolver(&self) -> &FieldResolver {
        &self.resolver
    }

    /// Generate one value for `name`.
    ///
    /// Custom handlers shadow provider operations of the same name. The
    /// result goes through `key` when one is given.
    pub fn perform(&mut self, name: &str, key: Option<&Key>, args: &Args) -> Result<Value, FieldError> {
        parse_field_name(name)?;

        let value = match self.handlers.get(name.trim()) {
            Some(handler) => {
                let handler = handler.clone();
                debug!(field = name, "Dispatching to custom handler");
                handler(self.generic.random_mut(), args)?
            }
            None => {
                let operation = self.resolver.resolve(&self.generic, name)?;
                operation(self.generic.random_mut(), args)?
            }
        };

        Ok(match key {
            Some(key) => key.apply(value, self.generic.random_mut()),
            None => value,
        })
    }
}

/// Produces one value per call.
///
/// ```rust
/// use faux_core::{Args, Locale};
/// use faux_schema::Field;
///
/// let mut field = Field::new(Locale::En, 42u64).unwrap();
/// let email = field.call("person.email").unwrap();
/// assert!(email.as_str().unwrap().contains('@'));
///
/// let age = field.call_with("age", &Args::new().with("minimum", 20).with("maximum", 30)).unwrap();
/// assert!((20..=30).contains(&age.as_i64().unwrap()));
/// ```
#[derive(Debug)]
pub struct Field {
    base: BaseField,
}

impl Field {
    pub fn new(locale: Locale, seed: impl Into<Seed>) -> Result<Self, FieldError> {
        Ok(Self {
            base: BaseField::new(locale, seed)?,
        })
    }

    pub fn from_generic(generic: Generic) -> Self {
        Self {
            base: BaseField::from_generic(generic),
        }
    }

    pub fn call(&mut self, name: &str) -> Result<Value, FieldError> {
        self.base.perform(name, None, &Args::new())
    }

    pub fn call_with(&mut self, name: &str, args: &Args) -> Result<Value, FieldError> {
        self.base.perform(name, None, args)
    }
}

impl Deref for Field {
    type Target = BaseField;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for Field {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}

/// Produces a list of values per call.
#[derive(Debug)]
pub struct Fieldset {
    base: BaseField,
    iterations: usize,
}

impl Fieldset {
    pub fn new(locale: Locale, seed: impl Into<Seed>) -> Result<Self, FieldError> {
        Ok(Self {
            base: BaseField::new(locale, seed)?,
            iterations: DEFAULT_FIELDSET_ITERATIONS,
        })
    }

    pub fn from_generic(generic: Generic) -> Self {
        Self {
            base: BaseField::from_generic(generic),
            iterations: DEFAULT_FIELDSET_ITERATIONS,
        }
    }

    /// Change the default number of values per call.
    pub fn with_iterations(mut self, iterations: usize) -> Result<Self, FieldError> {
        if iterations < 1 {
            return Err(FieldError::InvalidIterationCount(iterations));
        }
        self.iterations = iterations;
        Ok(self)
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn call(&mut self, name: &str) -> Result<Vec<Value>, FieldError> {
        self.perform(name, None, &Args::new(), None)
    }

    pub fn call_with(&mut self, name: &str, args: &Args) -> Result<Vec<Value>, FieldError> {
        self.perform(name, None, args, None)
    }

    /// Generate `iterations` values (the fieldset default when `None`).
    pub fn perform(
        &mut self,
        name: &str,
        key: Option<&Key>,
        args: &Args,
        iterations: Option<usize>,
    ) -> Result<Vec<Value>, FieldError> {
        let iterations = iterations.unwrap_or(self.iterations);
        if iterations < 1 {
            return Err(FieldError::InvalidIterationCount(iterations));
        }
        (0..iterations)
            .map(|_| self.base.perform(name, key, args))
            .collect()
    }
}

impl Deref for Fieldset {
    type Target = BaseField;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl DerefMut for Fieldset {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.base
    }
}
