//! Seed values.

use sha2::{Digest, Sha256};
use std::fmt;

/// Initial value that determines a [`crate::Random`] output sequence.
///
/// Integers seed the engine directly. Text (including single unicode
/// scalars) is reduced to 64 bits through SHA-256, which keeps text
/// seeds stable across platforms and toolchain versions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Seed {
    /// No seed: the engine is seeded from OS entropy
    #[default]
    Missing,
    /// Integer seed
    Int(u64),
    /// Text seed
    Text(String),
}

impl Seed {
    /// Whether a deterministic seed was supplied.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// 64-bit engine seed, or `None` for entropy seeding.
    pub fn engine_seed(&self) -> Option<u64> {
        match self {
            Self::Missing => None,
            Self::Int(value) => Some(*value),
            Self::Text(text) => {
                let digest = Sha256::digest(text.as_bytes());
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(&digest[..8]);
                Some(u64::from_le_bytes(bytes))
            }
        }
    }

    /// Parse a seed from command-line or configuration text.
    ///
    /// Numbers map the same way as the matching `From` impls, so
    /// `Seed::parse("-5") == Seed::from(-5i64)` and
    /// `Seed::parse("1.5") == Seed::from(1.5f64)`. Anything else is a text seed.
    pub fn parse(text: &str) -> Self {
        if let Ok(value) = text.parse::<u64>() {
            return Self::Int(value);
        }
        if let Ok(value) = text.parse::<i64>() {
            return Self::from(value);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from(value),
            _ => Self::Text(text.to_string()),
        }
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<entropy>"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

macro_rules! unsigned_seed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                fn from(value: $t) -> Self {
                    Self::Int(value as u64)
                }
            }
        )*
    };
}

unsigned_seed!(u8, u16, u32, u64, usize);

macro_rules! signed_seed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Seed {
                /// Negative integers map onto their two's complement bit pattern.
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value) as u64)
                }
            }
        )*
    };
}

signed_seed!(i8, i16, i32, i64);

impl From<f64> for Seed {
    /// Whole numbers seed like the equal integer; other values seed by
    /// their shortest decimal text.
    fn from(value: f64) -> Self {
        if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Self::from(value as i64)
        } else {
            Self::Text(value.to_string())
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<char> for Seed {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<Seed>> From<Option<T>> for Seed {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}
