//! Session clock

use std::time::Instant;

use resq_core::MonoTime;

/// Source of monotonic session time
///
/// All debounce, rate, and cooldown math runs on this clock. It must
/// never go backward; tests inject a manual implementation.
pub trait Clock {
    fn now(&self) -> MonoTime;
}

/// Wall-independent clock anchored at session start
/// INVARIANT: returned times are monotonically non-decreasing
pub struct MonoClock {
    origin: Instant,
}

impl MonoClock {
    pub fn new() -> Self {
        MonoClock {
            origin: Instant::now(),
        }
    }
}

impl Default for MonoClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonoClock {
    fn now(&self) -> MonoTime {
        MonoTime::from_micros(self.origin.elapsed().as_micros() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mono_clock_advances() {
        let clock = MonoClock::new();

        let t1 = clock.now();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let t2 = clock.now();

        assert!(t2 > t1);
    }
}
