//! Seeded linear congruential generator
//!
//! Reproducible uniform draws: the same seed always yields the same
//! sequence. Instances are cheap and meant to live for a single call.

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS: u64 = (1 << 31) - 1;

const HASH_BASE: u64 = 31;
const HASH_MODULUS: u64 = 1 << 31;

/// Polynomial rolling hash of a string's UTF-16 code units, in `[0, 2^31)`
pub fn seed_for(text: &str) -> u64 {
    text.encode_utf16()
        .fold(0, |hash, unit| (hash * HASH_BASE + u64::from(unit)) % HASH_MODULUS)
}

/// Deterministic pseudo-random sequence
#[derive(Debug, Clone)]
pub struct DeterministicSequenceGenerator {
    state: u64,
}

impl DeterministicSequenceGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed % MODULUS,
        }
    }

    /// Next draw in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.state = (MULTIPLIER * self.state + INCREMENT) % MODULUS;
        self.state as f64 / MODULUS as f64
    }

    /// Next draw mapped onto `[lo, hi]`
    pub fn next_in_range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next_f64() * (hi - lo)
    }
}
