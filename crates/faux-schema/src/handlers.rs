//! Custom field handlers.

use crate::error::FieldError;
use faux_core::{Args, Value};
use faux_random::Random;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

/// A user-supplied field implementation.
///
/// Handlers receive the field's random source and the keyword arguments
/// of the call.
pub type Handler = Arc<dyn Fn(&mut Random, &Args) -> Result<Value, FieldError> + Send + Sync>;

/// Whether `name` is usable as a handler name.
///
/// Accepts identifiers: a letter or underscore followed by letters,
/// digits or underscores. Non-ASCII letters count as letters.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Ordered table of custom handlers, consulted before provider lookup.
#[derive(Clone, Default)]
pub struct HandlerTable {
    entries: Vec<(String, Handler)>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` under `name`.
    ///
    /// Returns `Ok(false)` without replacing anything when `name` is already
    /// registered.
    pub fn register<F>(&mut self, name: &str, handler: F) -> Result<bool, FieldError>
    where
        F: Fn(&mut Random, &Args) -> Result<Value, FieldError> + Send + Sync + 'static,
    {
        self.register_shared(name, Arc::new(handler))
    }

    /// Register an already shared handler.
    pub fn register_shared(&mut self, name: &str, handler: Handler) -> Result<bool, FieldError> {
        if !is_identifier(name) {
            return Err(FieldError::InvalidHandlerName(name.to_string()));
        }
        if self.contains(name) {
            warn!(handler = name, "Handler already registered, keeping the first one");
            return Ok(false);
        }
        debug!(handler = name, "Registered custom handler");
        self.entries.push((name.to_string(), handler));
        Ok(true)
    }

    /// Register several handlers in order.
    ///
    /// Stops at the first invalid name; handlers before it stay registered.
    pub fn register_many<I, S>(&mut self, handlers: I) -> Result<usize, FieldError>
    where
        I: IntoIterator<Item = (S, Handler)>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (name, handler) in handlers {
            if self.register_shared(name.as_ref(), handler)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Remove a handler; unknown names are ignored.
    pub fn unregister(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(registered, _)| registered != name);
        let removed = self.entries.len() != before;
        if removed {
            debug!(handler = name, "Unregistered custom handler");
        }
        removed
    }

    pub fn unregister_many<I, S>(&mut self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names
            .into_iter()
            .filter(|name| self.unregister(name.as_ref()))
            .count()
    }

    pub fn unregister_all(&mut self) {
        debug!(count = self.entries.len(), "Unregistered all custom handlers");
        self.entries.clear();
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(registered, _)| registered == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&Handler> {
        self.entries
            .iter()
            .find(|(registered, _)| registered == name)
            .map(|(_, handler)| handler)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for HandlerTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerTable")
            .field("names", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant(text: &'static str) -> Handler {
        Arc::new(move |_random: &mut Random, _args: &Args| Ok(Value::from(text)))
    }

    #[test]
    fn test_identifiers() {
        for name in ["my_field", "_private", "field2", "имя", "x"] {
            assert!(is_identifier(name), "{name}");
        }
        for name in ["", "2fast", "my-field", "my field", "a.b", "😀"] {
            assert!(!is_identifier(name), "{name}");
        }
    }

    #[test]
    fn test_register_rejects_invalid_names() {
        let mut table = HandlerTable::new();
        let err = table
            .register("my-field", |_: &mut Random, _: &Args| Ok(Value::Null))
            .unwrap_err();
        assert!(matches!(err, FieldError::InvalidHandlerName(name) if name == "my-field"));
        assert!(table.is_empty());
    }

    #[test]
    fn test_first_registration_wins() {
        let mut table = HandlerTable::new();
        assert!(table.register_shared("greeting", constant("hello")).unwrap());
        assert!(!table.register_shared("greeting", constant("bye")).unwrap());
        assert_eq!(table.len(), 1);

        let handler = table.get("greeting").unwrap();
        assert_eq!(
            handler(&mut Random::new(1u64), &Args::new()).unwrap(),
            Value::from("hello")
        );
    }

    #[test]
    fn test_register_many_and_unregister() {
        let mut table = HandlerTable::new();
        let added = table
            .register_many(vec![
                ("one", constant("1")),
                ("two", constant("2")),
                ("three", constant("3")),
                ("one", constant("uno")),
            ])
            .unwrap();
        assert_eq!(added, 3);
        assert_eq!(table.names(), vec!["one", "two", "three"]);

        assert!(table.unregister("two"));
        assert!(!table.unregister("two"));
        assert_eq!(table.unregister_many(["one", "missing"]), 1);
        assert_eq!(table.names(), vec!["three"]);

        table.unregister_all();
        assert!(table.is_empty());
    }

    #[test]
    fn test_register_many_stops_on_invalid_name() {
        let mut table = HandlerTable::new();
        let result = table.register_many(vec![("ok", constant("1")), ("not ok", constant("2"))]);
        assert!(matches!(result, Err(FieldError::InvalidHandlerName(_))));
        assert!(table.contains("ok"));
    }

    #[test]
    fn test_handlers_see_arguments() {
        let mut table = HandlerTable::new();
        table
            .register("repeat", |random: &mut Random, args: &Args| {
                let times = args.usize("times")?.unwrap_or(1);
                let digit = random.randint(0, 9)?;
                Ok(Value::from(digit.to_string().repeat(times)))
            })
            .unwrap();
        let handler = table.get("repeat").unwrap();
        let value = handler(&mut Random::new(3u64), &Args::new().with("times", 4)).unwrap();
        let text = value.as_str().unwrap();
        assert_eq!(text.len(), 4);
        assert!(text.chars().all(|c| c == text.chars().next().unwrap()));
    }
}
