//! Test clock: deterministic `Clock` implementation for tests.

use lettermix_core::clock::Clock;

/// A clock that always returns the same reading, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_millis(&self) -> f64 {
        self.0
    }
}
