//! Random number generation for the boards.
//!
//! Every randomized board decision goes through [`DeterministicRng`]. In
//! production the implementation is [`Lcg`], a linear congruential
//! generator seeded once from the monotonic clock; in tests a seeded or
//! scripted implementation is injected.
//!
//! # Algorithm
//!
//! `seed = (1664525 * seed + 1013904223) mod 2^32`, output `seed / 2^32`.
//! These are the Numerical Recipes constants. Not suitable for anything
//! that needs unpredictability.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::clock::{Clock, SystemClock};

/// Multiplier of the recurrence.
pub const MULTIPLIER: u64 = 1_664_525;
/// Increment of the recurrence.
pub const INCREMENT: u64 = 1_013_904_223;
/// Modulus of the recurrence (2^32).
pub const MODULUS: u64 = 1 << 32;
/// Factor applied to the clock reading before it becomes a seed.
pub const SEED_SCALE: f64 = 1000.0;

/// Abstraction over random number generation.
pub trait DeterministicRng: Send + Sync {
    /// Generate a random `u32` in the range `[min, max]` inclusive.
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32;

    /// Generate a random `f64` in `[0.0, 1.0)`.
    fn next_f64(&mut self) -> f64;

    /// Pick an index in `[0, len)` as `floor(next_f64() * len)`.
    ///
    /// Returns `None` without drawing when `len` is zero.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn next_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_f64() * len as f64).floor() as usize;
        // Guards against a scripted double handing back 1.0.
        Some(index.min(len - 1))
    }
}

/// Seeded linear congruential generator.
///
/// # Example
/// ```
/// use lettermix_core::rng::Lcg;
///
/// let mut rng = Lcg::with_seed(1);
/// let value = rng.next_f64();
/// assert!((0.0..1.0).contains(&value));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
    seed: u32,
}

impl Lcg {
    /// Creates a generator from an explicit seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Creates a generator seeded from a single clock reading.
    ///
    /// The reading is multiplied by [`SEED_SCALE`], truncated toward zero
    /// and reduced modulo 2^32. Negative or non-finite readings seed zero.
    #[must_use]
    pub fn from_clock(clock: &dyn Clock) -> Self {
        Self::with_seed(seed_from_millis(clock.now_millis()))
    }

    /// Returns the current state. Feeding it back into [`Lcg::with_seed`]
    /// resumes the sequence from this point.
    #[must_use]
    pub fn seed(&self) -> u32 {
        self.seed
    }

    /// Advances the recurrence and returns `seed / 2^32`.
    ///
    /// Never returns 1.0; returns 0.0 only when the new seed is zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f64(&mut self) -> f64 {
        let next = (MULTIPLIER * u64::from(self.seed) + INCREMENT) % MODULUS;
        self.seed = u32::try_from(next).unwrap_or_default();
        f64::from(self.seed) / MODULUS as f64
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::from_clock(&SystemClock)
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

impl DeterministicRng for Lcg {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        assert!(min <= max, "min must not exceed max");
        let span = u64::from(max - min) + 1;
        let offset = (self.next_f64() * span as f64).floor() as u64;
        min + u32::try_from(offset.min(span - 1)).unwrap_or(max - min)
    }

    fn next_f64(&mut self) -> f64 {
        Lcg::next_f64(self)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn seed_from_millis(millis: f64) -> u32 {
    let scaled = millis * SEED_SCALE;
    if !scaled.is_finite() || scaled <= 0.0 {
        return 0;
    }
    // Float-to-int `as` saturates; the modulo keeps the low 32 bits.
    let truncated = scaled.trunc() as u64;
    (truncated % MODULUS) as u32
}

fn default_generator() -> &'static Mutex<Lcg> {
    static DEFAULT: OnceLock<Mutex<Lcg>> = OnceLock::new();
    DEFAULT.get_or_init(|| Mutex::new(Lcg::default()))
}

/// Draws the next value in `[0, 1)` from the process-wide generator.
///
/// The generator is seeded from [`SystemClock`] on first use. All callers
/// share one sequence, so the order of calls decides who gets which value.
pub fn random() -> f64 {
    default_generator()
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .next_f64()
}

/// Replaces the state of the process-wide generator.
pub fn reseed(seed: u32) {
    *default_generator()
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Lcg::with_seed(seed);
}
