//! Seedable random source for the fauxgen framework.
//!
//! [`Random`] wraps a seeded `StdRng` and adds the operations data
//! providers need on top of plain integers: weighted selection, masked
//! codes, fixed-length strings with optional uniqueness tracking and
//! fixed-precision floats.
//!
//! Re-seeding with the same [`Seed`] and replaying the same calls always
//! yields the same outputs.
//!
//! # Example
//!
//! ```rust
//! use faux_random::Random;
//!
//! let mut a = Random::new(42u64);
//! let mut b = Random::new(42u64);
//!
//! assert_eq!(a.randint(1, 100).unwrap(), b.randint(1, 100).unwrap());
//! assert_eq!(a.custom_code("@@-##", '@', '#').unwrap(), b.custom_code("@@-##", '@', '#').unwrap());
//! ```

mod error;
mod random;
mod seed;

pub use error::RandomError;
pub use random::{Random, DEFAULT_PRECISION};
pub use seed::Seed;
