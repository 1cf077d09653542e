//! # Clock
//!
//! Source of "now" for the booking form and review ages.
//!
//! The core never calls `Local::now()` directly; callers inject a clock so
//! that default check-in dates are reproducible in tests.

use chrono::{DateTime, Local, TimeZone};

/// Supplies the current instant in some time zone.
pub trait Clock {
    /// Time zone of the instants this clock produces.
    type Tz: TimeZone;

    /// The current instant.
    fn now(&self) -> DateTime<Self::Tz>;
}

/// Wall clock in the device's local time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    type Tz = Local;

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock frozen at one instant.
#[derive(Debug, Clone)]
pub struct FixedClock<Tz: TimeZone> {
    instant: DateTime<Tz>,
}

impl<Tz: TimeZone> FixedClock<Tz> {
    pub fn new(instant: DateTime<Tz>) -> Self {
        FixedClock { instant }
    }
}

impl<Tz: TimeZone> Clock for FixedClock<Tz> {
    type Tz = Tz;

    fn now(&self) -> DateTime<Tz> {
        self.instant.clone()
    }
}
