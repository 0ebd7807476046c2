//! Injected time source.
//!
//! The scheduler never reads the system clock directly; callers hand in a
//! `Clock` so scheduling stays deterministic under test. `ManualClock` also
//! covers the "advance the current date by a day" trick used to exercise
//! spaced repetition without waiting for real days to pass.

use chrono::{DateTime, Days, Utc};
use std::sync::Mutex;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall-clock time.
#[derive(Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that only moves when told to.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    /// Advances the simulated date by whole calendar days.
    pub fn advance_days(&self, days: u64) {
        let mut now = self.now.lock().unwrap();
        *now = *now + Days::new(days);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
