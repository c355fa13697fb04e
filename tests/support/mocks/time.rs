// tests/support/mocks/time.rs
use std::sync::Mutex;

use chrono::{DateTime, Duration, TimeZone, Utc};
use storygrid::application::ports::time::Clock;

/// Deterministic clock; tests advance it explicitly.
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()),
        }
    }
}

impl FixedClock {
    pub fn advance(&self, duration: Duration) {
        *self.now.lock().unwrap() += duration;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
