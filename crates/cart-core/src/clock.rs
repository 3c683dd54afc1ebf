//! # Clock
//!
//! Source of "today" for expiry checks. The cart and checkout hold a shared
//! clock so tests can pin the date while the binary uses the local calendar.

use chrono::{Local, NaiveDate};
use std::sync::Arc;

/// Provides the current calendar date
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Type alias for a shared clock (dynamic dispatch)
pub type SharedClock = Arc<dyn Clock>;

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock frozen on one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Shared handle to the system clock
pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

/// Shared handle to a fixed clock
pub fn fixed_clock(date: NaiveDate) -> SharedClock {
    Arc::new(FixedClock(date))
}
