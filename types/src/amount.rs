//! Fungible value amounts.
//!
//! Amounts are fixed-point integers (u128) to avoid floating-point errors.
//! One whole value unit is `10^18` raw units, the same granularity as the
//! token ledgers escrows are funded from.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;

/// An amount of value, stored as raw units.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ValueAmount(u128);

impl ValueAmount {
    pub const ZERO: Self = Self(0);

    /// Raw units in one whole value unit.
    pub const UNIT: u128 = 1_000_000_000_000_000_000;

    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// Build an amount from whole units, saturating on overflow.
    pub fn from_units(units: u128) -> Self {
        Self(units.saturating_mul(Self::UNIT))
    }

    /// Whole units contained in this amount (truncating).
    pub fn to_units(&self) -> u128 {
        self.0 / Self::UNIT
    }

    pub fn raw(&self) -> u128 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    pub fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for ValueAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Self::saturating_add)
    }
}

impl fmt::Display for ValueAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / Self::UNIT;
        let frac = self.0 % Self::UNIT;
        if frac == 0 {
            write!(f, "{whole}")
        } else {
            let digits = format!("{frac:018}");
            write!(f, "{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_whole_and_fractional() {
        assert_eq!(ValueAmount::from_units(3).to_string(), "3");
        assert_eq!(ValueAmount::new(ValueAmount::UNIT / 2).to_string(), "0.5");
        assert_eq!(ValueAmount::new(1).to_string(), "0.000000000000000001");
    }

    #[test]
    fn sum_saturates() {
        let total: ValueAmount = [ValueAmount::new(u128::MAX), ValueAmount::new(5)]
            .into_iter()
            .sum();
        assert_eq!(total, ValueAmount::new(u128::MAX));
    }
}
