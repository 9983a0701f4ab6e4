//! Post-processing transforms applied to generated values.

use faux_core::Value;
use faux_random::Random;
use std::fmt;
use std::sync::Arc;

type ValueFn = dyn Fn(Value) -> Value + Send + Sync;
type RandomFn = dyn Fn(Value, &mut Random) -> Value + Send + Sync;

/// A transform applied to a field's result.
///
/// The caller picks the variant explicitly: [`Key::value`] sees only the
/// generated value, [`Key::with_random`] also gets the field's random
/// source.
///
/// ```rust
/// use faux_core::Value;
/// use faux_random::Random;
/// use faux_schema::Key;
///
/// let upper = Key::value(|v| Value::from(v.to_string().to_uppercase()));
/// let mut random = Random::new(1u64);
/// assert_eq!(upper.apply(Value::from("abc"), &mut random), Value::from("ABC"));
/// ```
#[derive(Clone)]
pub enum Key {
    Value(Arc<ValueFn>),
    WithRandom(Arc<RandomFn>),
}

impl Key {
    pub fn value<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Value(Arc::new(f))
    }

    pub fn with_random<F>(f: F) -> Self
    where
        F: Fn(Value, &mut Random) -> Value + Send + Sync + 'static,
    {
        Self::WithRandom(Arc::new(f))
    }

    pub fn apply(&self, value: Value, random: &mut Random) -> Value {
        match self {
            Self::Value(f) => f(value),
            Self::WithRandom(f) => f(value, random),
        }
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(_) => f.write_str("Key::Value(..)"),
            Self::WithRandom(_) => f.write_str("Key::WithRandom(..)"),
        }
    }
}
