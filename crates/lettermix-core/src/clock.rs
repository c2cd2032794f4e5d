//! Clock abstraction for determinism.

use std::sync::OnceLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Abstraction over a monotonic high-resolution time source.
pub trait Clock: Send + Sync {
    /// Returns fractional milliseconds elapsed since an arbitrary, fixed epoch.
    ///
    /// Successive readings never decrease.
    fn now_millis(&self) -> f64;
}

/// Production clock: wall-clock time at process start plus monotonic
/// elapsed time.
///
/// The start offset is captured once per process, so readings keep
/// increasing within a run but differ between runs. The first reading is
/// never close to zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

struct ProcessEpoch {
    started: Instant,
    offset_millis: f64,
}

fn process_epoch() -> &'static ProcessEpoch {
    static EPOCH: OnceLock<ProcessEpoch> = OnceLock::new();
    EPOCH.get_or_init(|| ProcessEpoch {
        started: Instant::now(),
        offset_millis: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs_f64()
            * 1000.0,
    })
}

impl Clock for SystemClock {
    fn now_millis(&self) -> f64 {
        let epoch = process_epoch();
        epoch.offset_millis + epoch.started.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;

        let first = clock.now_millis();
        let second = clock.now_millis();

        assert!(second >= first);
    }

    #[test]
    fn test_system_clock_first_reading_is_anchored_to_wall_time() {
        // 2020-01-01T00:00:00Z in milliseconds.
        let floor = 1_577_836_800_000.0;

        let reading = SystemClock.now_millis();

        assert!(reading > floor, "reading {reading} is not anchored to wall time");
    }
}
