//! Field name resolution.
//!
//! A field name is either unqualified (`email`) or qualified with a
//! provider name (`person.email`). Qualifiers may be written with `.`,
//! `:`, `/` or whitespace, so `person:email` and `person email` are the
//! same field. Unqualified names go to the first provider, in registry
//! order, that has an operation of that name.

use crate::error::FieldError;
use faux_providers::{Generic, Operation};
use std::collections::HashMap;
use tracing::debug;

const SEPARATOR: char = '.';

/// A field name split into its optional provider and operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName<'a> {
    pub provider: Option<&'a str>,
    pub operation: &'a str,
}

/// Normalize the separators of a field name to `.`.
///
/// Fails with [`FieldError::MissingFieldName`] for a blank name and
/// [`FieldError::AmbiguousFieldName`] for more than one qualifier.
pub fn parse_field_name(name: &str) -> Result<String, FieldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(FieldError::MissingFieldName);
    }
    let normalized: String = trimmed
        .chars()
        .map(|c| {
            if c == ':' || c == '/' || c.is_whitespace() {
                SEPARATOR
            } else {
                c
            }
        })
        .collect();
    if normalized.matches(SEPARATOR).count() > 1 {
        return Err(FieldError::AmbiguousFieldName(name.to_string()));
    }
    Ok(normalized)
}

impl<'a> FieldName<'a> {
    /// View a normalized name produced by [`parse_field_name`].
    pub fn split(normalized: &'a str) -> Self {
        match normalized.split_once(SEPARATOR) {
            Some((provider, operation)) => Self {
                provider: Some(provider),
                operation,
            },
            None => Self {
                provider: None,
                operation: normalized,
            },
        }
    }
}

/// Resolves field names to provider operations and memoizes the result.
///
/// The cache is keyed by the name exactly as the caller wrote it and
/// lives as long as the resolver. Providers never change their operation
/// sets, so entries are never invalidated.
#[derive(Default)]
pub struct FieldResolver {
    cache: HashMap<String, Operation>,
    scans: usize,
}

impl FieldResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `name` against the providers of `registry`.
    pub fn resolve(&mut self, registry: &Generic, name: &str) -> Result<Operation, FieldError> {
        let normalized = parse_field_name(name)?;

        if let Some(operation) = self.cache.get(name) {
            debug!(field = name, "Resolution cache hit");
            return Ok(operation.clone());
        }

        self.scans += 1;
        let field = FieldName::split(&normalized);
        let operation = match field.provider {
            None => registry
                .providers()
                .iter()
                .find_map(|provider| provider.operation(field.operation))
                .ok_or_else(|| FieldError::UnknownField(name.to_string()))?,
            Some(provider_name) => {
                let provider = registry.provider(provider_name).ok_or_else(|| {
                    FieldError::UnknownProvider {
                        provider: provider_name.to_string(),
                        field: name.to_string(),
                    }
                })?;
                provider
                    .operation(field.operation)
                    .ok_or_else(|| FieldError::UnknownField(name.to_string()))?
            }
        };

        debug!(field = name, scans = self.scans, "Resolved field");
        self.cache.insert(name.to_string(), operation.clone());
        Ok(operation)
    }

    /// Number of registry scans performed so far (cache misses).
    pub fn scans(&self) -> usize {
        self.scans
    }

    /// Whether `name` has been resolved before.
    pub fn is_cached(&self, name: &str) -> bool {
        self.cache.contains_key(name)
    }

    /// Number of cached names.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }
}

impl std::fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&str> = self.cache.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("FieldResolver")
            .field("cached", &names)
            .field("scans", &self.scans)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use faux_core::{Args, Locale, Value};
    use faux_providers::{bind, operation_names, OperationSpec, Provider, ProviderError};
    use faux_random::Random;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Provider that counts how often it is asked for an operation.
    #[derive(Clone, Default)]
    struct Counting {
        lookups: Arc<AtomicUsize>,
    }

    impl Counting {
        fn ping(&self, _random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
            Ok(Value::from("pong"))
        }

        fn email(&self, _random: &mut Random, _args: &Args) -> Result<Value, ProviderError> {
            Ok(Value::from("counting@example.com"))
        }
    }

    static COUNTING: &[OperationSpec<Counting>] = &[
        OperationSpec { name: "ping", params: &[], method: Counting::ping },
        OperationSpec { name: "email", params: &[], method: Counting::email },
    ];

    impl Provider for Counting {
        fn name(&self) -> &str {
            "counting"
        }

        fn operations(&self) -> Vec<&'static str> {
            operation_names(COUNTING)
        }

        fn operation(&self, name: &str) -> Option<Operation> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            bind(self, COUNTING, name)
        }
    }

    fn registry_with_counter() -> (Generic, Arc<AtomicUsize>) {
        let mut generic = Generic::new(Locale::En, 1u64).unwrap();
        let counting = Counting::default();
        let lookups = counting.lookups.clone();
        generic.add_provider(Arc::new(counting)).unwrap();
        (generic, lookups)
    }

    #[test]
    fn test_parse_field_name() {
        assert_eq!(parse_field_name("person.name").unwrap(), "person.name");
        assert_eq!(parse_field_name("person:name").unwrap(), "person.name");
        assert_eq!(parse_field_name("person/name").unwrap(), "person.name");
        assert_eq!(parse_field_name(" person name ").unwrap(), "person.name");
        assert_eq!(parse_field_name("name").unwrap(), "name");
        assert_eq!(
            FieldName::split("person.name"),
            FieldName { provider: Some("person"), operation: "name" }
        );
        assert!(matches!(parse_field_name("   "), Err(FieldError::MissingFieldName)));
    }

    #[test]
    fn test_ambiguous_names_rejected() {
        let (generic, _) = registry_with_counter();
        let mut resolver = FieldResolver::new();
        for name in ["a.b.c", "person.name.first", "person:name/first", "a b c", "x..y"] {
            assert!(
                matches!(resolver.resolve(&generic, name), Err(FieldError::AmbiguousFieldName(_))),
                "{name}"
            );
        }
        assert_eq!(resolver.scans(), 0);
    }

    #[test]
    fn test_resolution_is_memoized() {
        let (generic, lookups) = registry_with_counter();
        let mut resolver = FieldResolver::new();

        let first = resolver.resolve(&generic, "ping").unwrap();
        let after_first = lookups.load(Ordering::SeqCst);
        assert_eq!(resolver.scans(), 1);
        assert_eq!(after_first, 1);

        let second = resolver.resolve(&generic, "ping").unwrap();
        assert_eq!(resolver.scans(), 1);
        assert_eq!(lookups.load(Ordering::SeqCst), after_first);

        let mut random = Random::new(1u64);
        assert_eq!(
            first(&mut random, &Args::new()).unwrap(),
            second(&mut random, &Args::new()).unwrap()
        );
    }

    #[test]
    fn test_first_provider_wins_unqualified() {
        let (generic, _) = registry_with_counter();
        let mut resolver = FieldResolver::new();
        let mut random = Random::new(1u64);

        let email = resolver.resolve(&generic, "email").unwrap();
        let value = email(&mut random, &Args::new()).unwrap();
        assert_ne!(value, Value::from("counting@example.com"));

        let qualified = resolver.resolve(&generic, "counting.email").unwrap();
        assert_eq!(
            qualified(&mut random, &Args::new()).unwrap(),
            Value::from("counting@example.com")
        );
    }

    #[test]
    fn test_separators_are_equivalent() {
        let (generic, _) = registry_with_counter();
        let mut resolver = FieldResolver::new();
        for name in ["counting.ping", "counting:ping", "counting/ping", "counting ping"] {
            let op = resolver.resolve(&generic, name).unwrap();
            assert_eq!(op(&mut Random::new(1u64), &Args::new()).unwrap(), Value::from("pong"));
        }
        assert_eq!(resolver.cached(), 4);
    }

    #[test]
    fn test_unknown_names() {
        let (generic, _) = registry_with_counter();
        let mut resolver = FieldResolver::new();
        assert!(matches!(
            resolver.resolve(&generic, "teleport"),
            Err(FieldError::UnknownField(name)) if name == "teleport"
        ));
        assert!(matches!(
            resolver.resolve(&generic, "mars.name"),
            Err(FieldError::UnknownProvider { provider, .. }) if provider == "mars"
        ));
        assert!(matches!(
            resolver.resolve(&generic, "person.teleport"),
            Err(FieldError::UnknownField(_))
        ));
        assert!(!resolver.is_cached("teleport"));
    }
}
