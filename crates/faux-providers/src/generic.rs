//! The provider registry.

use crate::address::Address;
use crate::error::ProviderError;
use crate::finance::Finance;
use crate::internet::Internet;
use crate::path::Path;
use crate::person::Person;
use crate::provider::Provider;
use faux_core::{Locale, Platform};
use faux_random::{Random, Seed};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// An ordered collection of providers sharing one random source.
///
/// The built-in providers are registered in a fixed order (`address`,
/// `finance`, `internet`, `path`, `person`); unqualified field lookups
/// scan them in that order, followed by anything added later with
/// [`Generic::add_provider`].
pub struct Generic {
    locale: Locale,
    random: Random,
    providers: Vec<Arc<dyn Provider>>,
}

impl Generic {
    /// Build the registry for a locale.
    pub fn new(locale: Locale, seed: impl Into<Seed>) -> Result<Self, ProviderError> {
        let providers: Vec<Arc<dyn Provider>> = vec![
            Arc::new(Address::new(locale)?),
            Arc::new(Finance::new(locale)?),
            Arc::new(Internet::new()),
            Arc::new(Path::new(Platform::current())?),
            Arc::new(Person::new(locale)?),
        ];
        let random = Random::new(seed);
        debug!(
            locale = %locale,
            seed = %random.seed_value(),
            providers = providers.len(),
            "Created provider registry"
        );
        Ok(Self {
            locale,
            random,
            providers,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Append a provider; names must be unique within the registry.
    pub fn add_provider(&mut self, provider: Arc<dyn Provider>) -> Result<(), ProviderError> {
        if self.provider(provider.name()).is_some() {
            return Err(ProviderError::DuplicateProvider(provider.name().to_string()));
        }
        debug!(provider = provider.name(), "Registered provider");
        self.providers.push(provider);
        Ok(())
    }

    /// Providers in lookup order.
    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// Provider by name.
    pub fn provider(&self, name: &str) -> Option<&Arc<dyn Provider>> {
        self.providers.iter().find(|p| p.name() == name)
    }

    pub fn random(&self) -> &Random {
        &self.random
    }

    pub fn random_mut(&mut self) -> &mut Random {
        &mut self.random
    }

    /// Reseed the shared random source. Providers are left untouched.
    pub fn reseed(&mut self, seed: impl Into<Seed>) {
        self.random.seed(seed);
        debug!(seed = %self.random.seed_value(), "Reseeded provider registry");
    }
}

impl fmt::Debug for Generic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generic")
            .field("locale", &self.locale)
            .field("seed", self.random.seed_value())
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{NetherlandsProvider, RussiaProvider};
    use faux_core::Args;

    #[test]
    fn test_default_provider_order() {
        let generic = Generic::new(Locale::En, 1u64).unwrap();
        let names: Vec<&str> = generic.providers().iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["address", "finance", "internet", "path", "person"]);
    }

    #[test]
    fn test_add_provider() {
        let mut generic = Generic::new(Locale::Ru, 1u64).unwrap();
        generic.add_provider(Arc::new(RussiaProvider::new().unwrap())).unwrap();
        generic.add_provider(Arc::new(NetherlandsProvider::new())).unwrap();
        assert_eq!(generic.providers().len(), 7);

        let err = generic
            .add_provider(Arc::new(NetherlandsProvider::new()))
            .unwrap_err();
        assert!(matches!(err, ProviderError::DuplicateProvider(name) if name == "netherlands_provider"));
    }

    #[test]
    fn test_reseed_replays_sequence() {
        let mut generic = Generic::new(Locale::En, 77u64).unwrap();
        let op = generic.provider("person").unwrap().operation("full_name").unwrap();
        let first = op(generic.random_mut(), &Args::new()).unwrap();
        generic.reseed(77u64);
        let second = op(generic.random_mut(), &Args::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_operation_runs_with_defaults() {
        for locale in [Locale::En, Locale::Ru, Locale::Nl] {
            let mut generic = Generic::new(locale, "every-op").unwrap();
            let ops: Vec<_> = generic
                .providers()
                .iter()
                .flat_map(|p| {
                    p.operations()
                        .into_iter()
                        .filter_map(|name| p.operation(name).map(|op| (name, op)))
                        .collect::<Vec<_>>()
                })
                .collect();
            for (name, op) in ops {
                let result = op(generic.random_mut(), &Args::new());
                assert!(result.is_ok(), "{locale}: {name} failed: {result:?}");
            }
        }
    }
}
