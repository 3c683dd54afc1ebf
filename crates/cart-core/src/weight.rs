//! Physical weight of shippable products, stored in whole milligrams.
//! Totals are accumulated at that precision and rounded only for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

const MG_PER_GRAM: u64 = 1_000;
const MG_PER_KG: u64 = 1_000_000;

/// Weight in milligrams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    pub const fn from_milligrams(mg: u64) -> Self {
        Weight(mg)
    }

    pub const fn from_grams(grams: u64) -> Self {
        Weight(grams * MG_PER_GRAM)
    }

    /// Convert kilograms to milligrams, rounding to the nearest milligram.
    /// Returns `None` for NaN, infinities, negative and out-of-range values.
    pub fn try_from_kg(kg: f64) -> Option<Self> {
        let mg = (kg * MG_PER_KG as f64).round();
        // u64::MAX as f64 rounds up to 2^64, which is already out of range
        if !mg.is_finite() || mg < 0.0 || mg >= u64::MAX as f64 {
            return None;
        }
        Some(Weight(mg as u64))
    }

    pub const fn milligrams(&self) -> u64 {
        self.0
    }

    /// Whole grams, half rounding up
    pub const fn rounded_grams(&self) -> u64 {
        self.0 / MG_PER_GRAM + (self.0 % MG_PER_GRAM >= MG_PER_GRAM / 2) as u64
    }

    pub fn kilograms(&self) -> f64 {
        self.0 as f64 / MG_PER_KG as f64
    }

    /// Kilograms with one decimal, as printed on the shipment notice
    pub fn display_kg(&self) -> String {
        let per_tenth = MG_PER_KG / 10;
        let tenths = self.0 / per_tenth + (self.0 % per_tenth >= per_tenth / 2) as u64;
        format!("{}.{}", tenths / 10, tenths % 10)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}g", self.rounded_grams())
    }
}

impl Add for Weight {
    type Output = Weight;

    /// Saturates rather than wrapping
    fn add(self, rhs: Weight) -> Weight {
        Weight(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Weight {
    fn add_assign(&mut self, rhs: Weight) {
        *self = *self + rhs;
    }
}

impl Mul<u32> for Weight {
    type Output = Weight;

    /// Saturates rather than wrapping
    fn mul(self, quantity: u32) -> Weight {
        Weight(self.0.saturating_mul(u64::from(quantity)))
    }
}
