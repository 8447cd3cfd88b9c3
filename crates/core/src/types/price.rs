//! Whole-unit prices.
//!
//! Gallery prices are listed in whole currency units (a $2,450 statue is
//! `Price::new(2450)`), so the amount is an unsigned integer rather than a
//! decimal.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, Mul};

use serde::{Deserialize, Serialize};

/// A non-negative price in whole currency units.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(u64);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(0);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64) -> Self {
        Self(amount)
    }

    /// Get the amount in whole units.
    #[must_use]
    pub const fn amount(self) -> u64 {
        self.0
    }

    /// Price of `quantity` items at this unit price, saturating on overflow.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(u64::from(quantity)))
    }

    /// Format for display with thousands separators (e.g., "$2,450").
    #[must_use]
    pub fn display(self) -> String {
        let digits = self.0.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        out.push('$');
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Mul<u32> for Price {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        self.times(quantity)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<u64> for Price {
    fn from(amount: u64) -> Self {
        Self(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Price::new(0).display(), "$0");
        assert_eq!(Price::new(185).display(), "$185");
        assert_eq!(Price::new(2450).display(), "$2,450");
        assert_eq!(Price::new(28_500).to_string(), "$28,500");
        assert_eq!(Price::new(1_234_567).to_string(), "$1,234,567");
    }

    #[test]
    fn test_times_and_sum() {
        let total: Price = [Price::new(100) * 3, Price::new(185).times(2)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::new(670));
    }

    #[test]
    fn test_times_saturates() {
        assert_eq!(Price::new(u64::MAX).times(2).amount(), u64::MAX);
    }
}
