//! Country-specific providers.
//!
//! These are not part of the default registry; add them with
//! [`crate::Generic::add_provider`], or look one up by its provider name
//! with [`by_name`].

mod nl;
mod ru;

pub use nl::NetherlandsProvider;
pub use ru::RussiaProvider;

use crate::error::ProviderError;
use crate::provider::Provider;
use std::sync::Arc;

/// Names accepted by [`by_name`].
pub const BUILTIN_NAMES: &[&str] = &["russia_provider", "netherlands_provider"];

/// Build a country-specific provider from its name.
pub fn by_name(name: &str) -> Result<Option<Arc<dyn Provider>>, ProviderError> {
    let provider: Arc<dyn Provider> = match name {
        "russia_provider" => Arc::new(RussiaProvider::new()?),
        "netherlands_provider" => Arc::new(NetherlandsProvider::new()),
        _ => return Ok(None),
    };
    Ok(Some(provider))
}
