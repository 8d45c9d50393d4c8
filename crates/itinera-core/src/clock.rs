//! Source of "today" for start-date validation.

use jiff::{civil::Date, Zoned};

/// Supplies the current calendar date.
pub trait Clock: Send + Sync {
    fn today(&self) -> Date;
}

/// Today's date in the system time zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        Zoned::now().date()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}
