//! Supported locales.

use crate::enums::{Enumerable, NonEnumerableError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Locale of the bundled datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    #[default]
    En,
    /// Russian
    Ru,
    /// Dutch
    Nl,
}

impl Enumerable for Locale {
    const KIND: &'static str = "locale";
    const ALL: &'static [Self] = &[Self::En, Self::Ru, Self::Nl];

    fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
            Self::Nl => "nl",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = NonEnumerableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as Enumerable>::parse(s)
    }
}
