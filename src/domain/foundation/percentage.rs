//! Percentage value object used for goal progress (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    pub const ZERO: Self = Self(0);
    pub const HUNDRED: Self = Self(100);

    /// Creates a Percentage, returning error if above 100.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                i64::from(value),
            ));
        }
        Ok(Self(value))
    }

    /// Progress of `current` towards `target`, rounded and clamped to 0..=100.
    ///
    /// Returns `None` when the target is zero, negative or not finite.
    pub fn from_ratio(current: f64, target: f64) -> Option<Self> {
        if !target.is_finite() || target <= 0.0 || !current.is_finite() {
            return None;
        }
        let pct = (current / target * 100.0).round().clamp(0.0, 100.0);
        Some(Self(pct as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// True once the target is met.
    pub fn is_complete(&self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_new_rejects_values_over_hundred() {
        assert!(Percentage::try_new(100).is_ok());
        assert!(Percentage::try_new(101).is_err());
    }

    #[test]
    fn from_ratio_rounds_to_whole_percent() {
        assert_eq!(Percentage::from_ratio(1.0, 3.0), Some(Percentage(33)));
        assert_eq!(Percentage::from_ratio(2.0, 3.0), Some(Percentage(67)));
    }

    #[test]
    fn from_ratio_clamps_overachievement() {
        let pct = Percentage::from_ratio(180.0, 150.0).unwrap();
        assert_eq!(pct, Percentage::HUNDRED);
        assert!(pct.is_complete());
    }

    #[test]
    fn from_ratio_clamps_negative_progress() {
        assert_eq!(Percentage::from_ratio(-5.0, 10.0), Some(Percentage::ZERO));
    }

    #[test]
    fn from_ratio_is_none_without_positive_target() {
        assert_eq!(Percentage::from_ratio(10.0, 0.0), None);
        assert_eq!(Percentage::from_ratio(10.0, -1.0), None);
        assert_eq!(Percentage::from_ratio(f64::NAN, 1.0), None);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage(42)), "42%");
    }
}
