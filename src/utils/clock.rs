use chrono::{NaiveDateTime, Utc};

use super::Timezone;

/// Source of the current wall-clock time
pub(crate) trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system clock and converts it into the configured zone
#[derive(Debug, Clone, Copy)]
pub(crate) struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub(crate) fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        self.timezone.wall_clock(Utc::now())
    }
}

/// Always returns the same instant (`--at` and tests)
#[derive(Debug, Clone, Copy)]
pub(crate) struct FixedClock(pub(crate) NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
