//! # Money
//!
//! Prices, line totals and balances are held as integer hundredths so that
//! subtotals never drift. Receipts print whole units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Number of minor units in one major unit
const MINOR_PER_MAJOR: i64 = 100;

/// Monetary amount in the smallest unit (hundredths)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero amount
    pub const ZERO: Money = Money(0);

    /// Create from the smallest unit
    pub const fn from_minor(amount: i64) -> Self {
        Money(amount)
    }

    /// Create from whole major units
    pub const fn from_major(amount: i64) -> Self {
        Money(amount * MINOR_PER_MAJOR)
    }

    /// Convert a decimal amount to the smallest unit, rounding to nearest.
    /// Returns `None` for NaN, infinities and amounts outside the `i64` range.
    pub fn try_from_decimal(amount: f64) -> Option<Self> {
        let minor = (amount * MINOR_PER_MAJOR as f64).round();
        // i64::MAX as f64 rounds up to 2^63, which is already out of range
        if !minor.is_finite() || minor < i64::MIN as f64 || minor >= i64::MAX as f64 {
            return None;
        }
        Some(Money(minor as i64))
    }

    /// Amount in the smallest unit
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Decimal amount in major units
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    /// Whole major units, half rounding away from zero
    pub fn rounded_major(&self) -> i64 {
        let half = MINOR_PER_MAJOR / 2;
        let (major, rest) = (self.0 / MINOR_PER_MAJOR, self.0 % MINOR_PER_MAJOR);
        if rest >= half {
            major + 1
        } else if rest <= -half {
            major - 1
        } else {
            major
        }
    }

    /// True for amounts below zero (refunds, bad input)
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Line total for `quantity` units, `None` on overflow
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(quantity)).map(Money)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rounded_major())
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl Mul<u32> for Money {
    type Output = Money;

    fn mul(self, quantity: u32) -> Money {
        Money(self.0 * i64::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}
