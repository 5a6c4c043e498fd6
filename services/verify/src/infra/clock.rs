use chrono::{DateTime, Utc};

use crate::domain::ports::Clock;

/// Wall clock used everywhere outside of tests.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
