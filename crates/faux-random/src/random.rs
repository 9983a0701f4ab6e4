//! The seedable random source.

use crate::error::RandomError;
use crate::seed::Seed;
use faux_core::Enumerable;
use rand::distributions::{WeightedError, WeightedIndex};
use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::sync::{Mutex, OnceLock};

/// Default number of decimal places kept by [`Random::uniform`].
pub const DEFAULT_PRECISION: u32 = 15;

const ASCII_UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const RANDSTR_LENGTH: (usize, usize) = (16, 128);
const UNIQUE_ATTEMPTS: usize = 10_000;

/// Seedable pseudo-random generator with data-generation helpers.
///
/// Not designed for concurrent mutation: give each thread its own
/// instance (or wrap one in a lock, as [`Random::shared`] does).
#[derive(Debug)]
pub struct Random {
    rng: StdRng,
    seed: Seed,
    /// Strings already returned by `randstr(.., unique = true)`
    seen: HashSet<String>,
}

impl Random {
    /// Create a random source from a seed.
    pub fn new(seed: impl Into<Seed>) -> Self {
        let seed = seed.into();
        Self {
            rng: engine(&seed),
            seed,
            seen: HashSet::new(),
        }
    }

    /// Process-wide convenience instance, seeded from entropy.
    ///
    /// Library code never reaches for this; it exists for host
    /// applications that want free-function style access.
    pub fn shared() -> &'static Mutex<Random> {
        static SHARED: OnceLock<Mutex<Random>> = OnceLock::new();
        SHARED.get_or_init(|| Mutex::new(Random::new(Seed::Missing)))
    }

    /// Reinitialize the engine.
    ///
    /// Clears the uniqueness set, so a reseeded source may repeat strings
    /// returned before the reseed.
    pub fn seed(&mut self, seed: impl Into<Seed>) {
        self.seed = seed.into();
        self.rng = engine(&self.seed);
        self.seen.clear();
    }

    /// The seed this source was last (re)initialized with.
    pub fn seed_value(&self) -> &Seed {
        &self.seed
    }

    /// Whether the source was given a deterministic seed.
    pub fn is_seeded(&self) -> bool {
        !self.seed.is_missing()
    }

    /// Random integer in `a..=b`.
    pub fn randint(&mut self, a: i64, b: i64) -> Result<i64, RandomError> {
        if a > b {
            return Err(RandomError::InvalidRange {
                a: a.to_string(),
                b: b.to_string(),
            });
        }
        Ok(self.rng.gen_range(a..=b))
    }

    /// `amount` random integers in `a..=b`.
    pub fn randints(&mut self, amount: usize, a: i64, b: i64) -> Result<Vec<i64>, RandomError> {
        if amount < 1 {
            return Err(RandomError::InvalidArity {
                amount,
                reason: "amount must be at least 1",
            });
        }
        (0..amount).map(|_| self.randint(a, b)).collect()
    }

    /// Random float in `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// `true` with probability `p` (values outside `[0, 1]` saturate).
    pub fn random_bool(&mut self, p: f64) -> bool {
        self.random() < p
    }

    /// Random element of a slice.
    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, RandomError> {
        items.choose(&mut self.rng).ok_or(RandomError::EmptyChoices)
    }

    /// Random variant of an enumeration.
    pub fn choose_enum<E: Enumerable>(&mut self) -> E {
        let idx = self.rng.gen_range(0..E::ALL.len());
        E::ALL[idx]
    }

    /// Random element chosen proportionally to its weight.
    ///
    /// Weights do not need to sum to one.
    pub fn weighted_choice<'a, T>(&mut self, choices: &'a [(T, f64)]) -> Result<&'a T, RandomError> {
        if choices.is_empty() {
            return Err(RandomError::EmptyChoices);
        }
        let index = WeightedIndex::new(choices.iter().map(|(_, w)| *w)).map_err(|e| match e {
            WeightedError::NoItem => RandomError::EmptyChoices,
            other => RandomError::InvalidWeights(other.to_string()),
        })?;
        Ok(&choices[index.sample(&mut self.rng)].0)
    }

    /// Fill a mask: `char` becomes an uppercase letter, `digit` a digit,
    /// every other character is copied verbatim.
    pub fn custom_code(&mut self, mask: &str, char: char, digit: char) -> Result<String, RandomError> {
        if char == digit {
            return Err(RandomError::InvalidMask(char));
        }
        Ok(mask
            .chars()
            .map(|c| {
                if c == char {
                    ASCII_UPPERCASE[self.rng.gen_range(0..ASCII_UPPERCASE.len())] as char
                } else if c == digit {
                    char::from(b'0' + self.rng.gen_range(0..10u8))
                } else {
                    c
                }
            })
            .collect())
    }

    /// [`Random::custom_code`] with the default mask `@###`.
    pub fn custom_code_default(&mut self) -> String {
        self.custom_code("@###", '@', '#')
            .unwrap_or_default()
    }

    /// `length` characters drawn from `alphabet`.
    pub fn generate_string(&mut self, alphabet: &str, length: usize) -> Result<String, RandomError> {
        let chars: Vec<char> = alphabet.chars().collect();
        if chars.is_empty() {
            return Err(RandomError::EmptyChoices);
        }
        Ok((0..length)
            .map(|_| chars[self.rng.gen_range(0..chars.len())])
            .collect())
    }

    /// `count` random decimal digits.
    pub fn digits(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| char::from(b'0' + self.rng.gen_range(0..10u8)))
            .collect()
    }

    /// Random alphanumeric string.
    ///
    /// Without `length` the length is drawn from 16..=128. With `unique`
    /// the string is guaranteed not to repeat any unique string this
    /// source produced since it was last seeded.
    pub fn randstr(&mut self, length: Option<usize>, unique: bool) -> Result<String, RandomError> {
        let length = match length {
            Some(length) => length,
            None => self.rng.gen_range(RANDSTR_LENGTH.0..=RANDSTR_LENGTH.1),
        };

        if !unique {
            return Ok(self.alphanumeric(length));
        }

        for _ in 0..UNIQUE_ATTEMPTS {
            let candidate = self.alphanumeric(length);
            if self.seen.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(RandomError::UniquenessExhausted {
            length,
            attempts: UNIQUE_ATTEMPTS,
        })
    }

    /// Random float in `[a, b)` rounded to `precision` decimal places.
    pub fn uniform(&mut self, a: f64, b: f64, precision: u32) -> f64 {
        let value = a + (b - a) * self.random();
        round_to(value, precision)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// `k` distinct elements of a slice, in random order.
    pub fn sample<'a, T>(&mut self, items: &'a [T], k: usize) -> Result<Vec<&'a T>, RandomError> {
        if k > items.len() {
            return Err(RandomError::InvalidArity {
                amount: k,
                reason: "sample larger than population",
            });
        }
        Ok(items.choose_multiple(&mut self.rng, k).collect())
    }

    fn alphanumeric(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| ALPHANUMERIC[self.rng.gen_range(0..ALPHANUMERIC.len())] as char)
            .collect()
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new(Seed::Missing)
    }
}

impl RngCore for Random {
    fn next_u32(&mut self) -> u32 {
        self.rng.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.rng.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.rng.try_fill_bytes(dest)
    }
}

fn engine(seed: &Seed) -> StdRng {
    match seed.engine_seed() {
        Some(value) => StdRng::seed_from_u64(value),
        None => StdRng::from_entropy(),
    }
}

/// Round half away from zero to `precision` decimal places.
fn round_to(value: f64, precision: u32) -> f64 {
    // f64 carries at most 17 significant digits
    if precision > 16 {
        return value;
    }
    let factor = 10f64.powi(precision as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use faux_core::Gender;

    #[test]
    fn test_determinism() {
        let mut a = Random::new(0xFFu64);
        let mut b = Random::new(0xFFu64);

        for _ in 0..50 {
            assert_eq!(a.randint(0, 1_000).unwrap(), b.randint(0, 1_000).unwrap());
            assert_eq!(a.custom_code_default(), b.custom_code_default());
            assert_eq!(a.randstr(None, false).unwrap(), b.randstr(None, false).unwrap());
            assert_eq!(a.uniform(2.3, 10.5, 4), b.uniform(2.3, 10.5, 4));
        }
    }

    #[test]
    fn test_reseed_replays_sequence() {
        let mut random = Random::new("seed");
        let first: Vec<i64> = random.randints(10, 1, 100).unwrap();

        random.seed("seed");
        let second: Vec<i64> = random.randints(10, 1, 100).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_unicode_seed() {
        let mut a = Random::new('👽');
        let mut b = Random::new("👽");
        assert_eq!(a.custom_code_default(), b.custom_code_default());
    }

    #[test]
    fn test_randints() {
        let mut random = Random::new(1u64);
        for amount in [3, 5, 10] {
            let values = random.randints(amount, 1, 20).unwrap();
            assert_eq!(values.len(), amount);
            assert!(values.iter().all(|v| (1..=20).contains(v)));
        }
    }

    #[test]
    fn test_randints_invalid_amount() {
        let mut random = Random::new(1u64);
        assert!(matches!(
            random.randints(0, 1, 2),
            Err(RandomError::InvalidArity { amount: 0, .. })
        ));
    }

    #[test]
    fn test_randint_invalid_range() {
        let mut random = Random::new(1u64);
        assert!(matches!(
            random.randint(5, 1),
            Err(RandomError::InvalidRange { .. })
        ));
        assert_eq!(random.randint(7, 7).unwrap(), 7);
    }

    #[test]
    fn test_generate_string() {
        let mut random = Random::new(1u64);
        assert_eq!(random.generate_string("U", 10).unwrap(), "UUUUUUUUUU");
        assert_eq!(random.generate_string("AB", 20).unwrap().len(), 20);
        assert_eq!(
            random.generate_string("", 3),
            Err(RandomError::EmptyChoices)
        );
    }

    #[test]
    fn test_uniform_precision() {
        let mut random = Random::new(7u64);
        for precision in [4u32, 6, 8] {
            for _ in 0..100 {
                let value = random.uniform(2.3, 10.5, precision);
                assert!((2.3..=10.5).contains(&value));
                let text = value.to_string();
                let decimals = text.split('.').nth(1).map(str::len).unwrap_or(0);
                assert!(decimals <= precision as usize, "{text} has too many digits");
            }
        }
    }

    #[test]
    fn test_custom_code_mask() {
        let mut random = Random::new(3u64);
        for (mask, digit, char) in [
            ("##-FA-@@", '#', '@'),
            ("**-AF-$$", '*', '$'),
            ("**-š好-$$", '*', '$'),
        ] {
            let result = random.custom_code(mask, char, digit).unwrap();
            let parts: Vec<&str> = result.split('-').collect();
            let mask_parts: Vec<&str> = mask.split('-').collect();
            assert!(parts[0].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(parts[1], mask_parts[1]);
            assert!(parts[2].chars().all(|c| c.is_ascii_alphabetic()));
        }
    }

    #[test]
    fn test_custom_code_same_placeholders() {
        let mut random = Random::new(3u64);
        assert_eq!(
            random.custom_code("??-FF-??", '?', '?'),
            Err(RandomError::InvalidMask('?'))
        );
        assert!(random.custom_code("@@-FF-@@", '@', '@').is_err());
    }

    #[test]
    fn test_custom_code_seeded_oracle() {
        // Same seed, same output (no bit-compatibility with other engines).
        for seed in [Seed::from(32u64), Seed::from(0xFFu64), Seed::from("👽")] {
            let mut a = Random::new(seed.clone());
            let mut b = Random::new(seed);
            let code = a.custom_code_default();
            assert_eq!(code, b.custom_code_default());
            assert_eq!(code.chars().count(), 4);
            assert!(code.starts_with(|c: char| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_randstr_lengths() {
        let mut random = Random::new(9u64);
        for length in [64, 128, 256] {
            let first = random.randstr(Some(length), false).unwrap();
            let second = random.randstr(Some(length), false).unwrap();
            assert_eq!(first.len(), length);
            assert_ne!(first, second);
        }
        let len = random.randstr(None, false).unwrap().len();
        assert!((16..=128).contains(&len));
    }

    #[test]
    fn test_randstr_unique() {
        for count in [1000, 5000, 10000] {
            let mut random = Random::new(Seed::Missing);
            let results: HashSet<String> = (0..count)
                .map(|_| random.randstr(None, true).unwrap())
                .collect();
            assert_eq!(results.len(), count);
        }
    }

    #[test]
    fn test_randstr_unique_short_strings_exhaust() {
        let mut random = Random::new(5u64);
        let mut results = HashSet::new();
        // 62 single-character strings exist; all of them must come out distinct.
        for _ in 0..62 {
            assert!(results.insert(random.randstr(Some(1), true).unwrap()));
        }
        assert!(matches!(
            random.randstr(Some(1), true),
            Err(RandomError::UniquenessExhausted { length: 1, .. })
        ));
    }

    #[test]
    fn test_randstr_same_seed_non_unique() {
        for seed in ["👽", "seed"] {
            let mut random = Random::new(seed);
            let first = random.randstr(None, false).unwrap();
            random.seed(seed);
            let second = random.randstr(None, false).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_weighted_choice_skew() {
        for seed in [1u64, 2, 3, 4, 5] {
            let mut random = Random::new(seed);
            let choices = [("A", 0.9), ("B", 0.1)];
            let a_count = (0..1000)
                .filter(|_| *random.weighted_choice(&choices).unwrap() == "A")
                .count();
            assert!(a_count > 800, "seed {seed}: A chosen {a_count} times");
        }
    }

    #[test]
    fn test_weighted_choice_unnormalized() {
        let mut random = Random::new(11u64);
        let choices = [(Gender::Male, 1.0), (Gender::Female, 9.0)];
        let females = (0..100)
            .filter(|_| *random.weighted_choice(&choices).unwrap() == Gender::Female)
            .count();
        assert!(females > 80);
    }

    #[test]
    fn test_weighted_choice_errors() {
        let mut random = Random::new(11u64);
        let empty: [(&str, f64); 0] = [];
        assert_eq!(random.weighted_choice(&empty), Err(RandomError::EmptyChoices));
        assert!(matches!(
            random.weighted_choice(&[("A", 0.0), ("B", 0.0)]),
            Err(RandomError::InvalidWeights(_))
        ));
    }

    #[test]
    fn test_choice_and_enum() {
        let mut random = Random::new(0xFu64);
        let empty: [u8; 0] = [];
        assert_eq!(random.choice(&empty), Err(RandomError::EmptyChoices));

        let first: Gender = random.choose_enum();
        random.seed(0xFu64);
        let second: Gender = random.choose_enum();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sample() {
        let mut random = Random::new(2u64);
        let pool = [1, 2, 3, 4, 5];
        let picked = random.sample(&pool, 3).unwrap();
        let distinct: HashSet<_> = picked.iter().collect();
        assert_eq!(distinct.len(), 3);
        assert!(random.sample(&pool, 6).is_err());
    }

    #[test]
    fn test_reseed_clears_unique_set() {
        let mut random = Random::new(4u64);
        let first = random.randstr(Some(8), true).unwrap();
        random.seed(4u64);
        assert_eq!(random.randstr(Some(8), true).unwrap(), first);
    }

    #[test]
    fn test_random_bool_bounds() {
        let mut random = Random::new(8u64);
        for _ in 0..200 {
            assert!(!random.random_bool(0.0));
            assert!(random.random_bool(1.0));
            assert!(random.random_bool(2.5));
            assert!(!random.random_bool(-1.0));
        }
        let hits = (0..10_000).filter(|_| random.random_bool(0.3)).count();
        assert!((2_700..3_300).contains(&hits), "{hits}");
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let shuffled = |seed: u64| {
            let mut items: Vec<u32> = (0..20).collect();
            Random::new(seed).shuffle(&mut items);
            items
        };
        let first = shuffled(10);
        assert_eq!(first, shuffled(10));
        assert_ne!(first, shuffled(11));

        let mut sorted = first.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());

        let mut empty: Vec<u32> = Vec::new();
        Random::new(10u64).shuffle(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_shared_instance() {
        let first = Random::shared();
        assert!(std::ptr::eq(first, Random::shared()));

        let mut random = first.lock().unwrap();
        assert!(!random.is_seeded());
        let value = random.randint(1, 6).unwrap();
        assert!((1..=6).contains(&value));
    }

    #[test]
    fn test_rng_core_follows_seed() {
        let mut random = Random::new(99u64);
        let mut engine = StdRng::seed_from_u64(99);
        assert_eq!(random.next_u64(), engine.next_u64());
        assert_eq!(random.next_u32(), engine.next_u32());

        let mut ours = [0u8; 16];
        let mut theirs = [0u8; 16];
        random.fill_bytes(&mut ours);
        engine.fill_bytes(&mut theirs);
        assert_eq!(ours, theirs);
        random.try_fill_bytes(&mut ours).unwrap();
        engine.try_fill_bytes(&mut theirs).unwrap();
        assert_eq!(ours, theirs);
    }

    #[test]
    fn test_rand_adapters_replay() {
        let pool = ["a", "b", "c", "d", "e"];
        let draw = |seed: u64| {
            let mut random = Random::new(seed);
            let picked = *pool.choose(&mut random).unwrap();
            let roll: u8 = random.gen_range(1..=6);
            (picked, roll)
        };
        let (picked, roll) = draw(5);
        assert!(pool.contains(&picked));
        assert!((1..=6).contains(&roll));
        assert_eq!(draw(5), draw(5));
    }
}
