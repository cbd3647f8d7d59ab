//! Numeric and date attributes of a creature
//!
//! Each newtype holds a value inside its allowed range. Growth operations
//! (training, healing, evolution) go through `saturating_*` helpers that clamp
//! to the ceiling instead of rejecting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// Age
// ============================================================================

/// Age in years (0-5000)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct Age(i32);

impl Age {
    pub const MIN: i32 = 0;
    pub const MAX: i32 = 5000;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `years` is outside 0-5000.
    pub fn new(years: i32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&years) {
            return Err(DomainError::validation(
                "age",
                format!("Age must be between {} and {} years", Self::MIN, Self::MAX),
            ));
        }
        Ok(Self(years))
    }

    pub fn years(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for Age {
    type Error = DomainError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<Age> for i32 {
    fn from(age: Age) -> i32 {
        age.0
    }
}

// ============================================================================
// MagicPower
// ============================================================================

/// Magic power (1-1000)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct MagicPower(f64);

impl MagicPower {
    pub const MIN: f64 = 1.0;
    pub const MAX: f64 = 1000.0;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is outside 1-1000 or NaN.
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(DomainError::validation(
                "magic_power",
                format!(
                    "Magic power must be between {} and {}",
                    Self::MIN,
                    Self::MAX
                ),
            ));
        }
        Ok(Self(value))
    }

    /// Add `amount`, stopping at the ceiling.
    pub(crate) fn saturating_add(self, amount: f64) -> Self {
        Self((self.0 + amount).clamp(Self::MIN, Self::MAX))
    }

    /// Multiply by `factor`, stopping at the ceiling.
    pub(crate) fn saturating_mul(self, factor: f64) -> Self {
        Self((self.0 * factor).clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_max(&self) -> bool {
        self.0 >= Self::MAX
    }
}

impl fmt::Display for MagicPower {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<f64> for MagicPower {
    type Error = DomainError;

    fn try_from(v: f64) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<MagicPower> for f64 {
    fn from(power: MagicPower) -> f64 {
        power.0
    }
}

// ============================================================================
// HealthPoints
// ============================================================================

/// Health points (1-500)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct HealthPoints(i32);

impl HealthPoints {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 500;

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `hp` is outside 1-500.
    pub fn new(hp: i32) -> Result<Self, DomainError> {
        if !(Self::MIN..=Self::MAX).contains(&hp) {
            return Err(DomainError::validation(
                "health_points",
                format!(
                    "Health points must be between {} and {}",
                    Self::MIN,
                    Self::MAX
                ),
            ));
        }
        Ok(Self(hp))
    }

    /// Add `amount`, stopping at the ceiling.
    pub(crate) fn saturating_add(self, amount: i32) -> Self {
        Self(self.0.saturating_add(amount).clamp(Self::MIN, Self::MAX))
    }

    /// Multiply by `factor`, truncate toward zero, stop at the ceiling.
    pub(crate) fn saturating_scale(self, factor: f64) -> Self {
        // `as` saturates on overflow, the clamp keeps the range
        let scaled = (f64::from(self.0) * factor).trunc() as i32;
        Self(scaled.clamp(Self::MIN, Self::MAX))
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    pub fn is_max(&self) -> bool {
        self.0 >= Self::MAX
    }
}

impl fmt::Display for HealthPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i32> for HealthPoints {
    type Error = DomainError;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        Self::new(v)
    }
}

impl From<HealthPoints> for i32 {
    fn from(hp: HealthPoints) -> i32 {
        hp.0
    }
}

// ============================================================================
// DiscoveryDate
// ============================================================================

/// Date a creature was first recorded, between 1000-01-01 and today
///
/// The upper bound moves with the calendar, so the only constructor takes the
/// caller's notion of `today`. Serialize-only: no path can skip that bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "NaiveDate")]
pub struct DiscoveryDate(NaiveDate);

impl DiscoveryDate {
    /// Earliest accepted discovery date.
    pub fn earliest() -> NaiveDate {
        NaiveDate::from_ymd_opt(1000, 1, 1).unwrap_or(NaiveDate::MIN)
    }

    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `date` is before 1000-01-01 or
    /// after `today`.
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, DomainError> {
        if date < Self::earliest() || date > today {
            return Err(DomainError::validation(
                "discovery_date",
                "Discovery date must be between 01.01.1000 and current date",
            ));
        }
        Ok(Self(date))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for DiscoveryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0.format(crate::common::DATE_FORMAT).to_string())
    }
}

impl From<DiscoveryDate> for NaiveDate {
    fn from(date: DiscoveryDate) -> NaiveDate {
        date.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod age {
        use super::*;

        #[test]
        fn boundaries() {
            assert!(Age::new(-1).is_err());
            assert_eq!(Age::new(0).unwrap().years(), 0);
            assert_eq!(Age::new(5000).unwrap().years(), 5000);
            assert_eq!(Age::new(5001).unwrap_err().field(), Some("age"));
        }
    }

    mod magic_power {
        use super::*;

        #[test]
        fn boundaries() {
            assert!(MagicPower::new(0.99).is_err());
            assert!(MagicPower::new(1.0).is_ok());
            assert!(MagicPower::new(1000.0).is_ok());
            assert!(MagicPower::new(1000.01).is_err());
        }

        #[test]
        fn rejects_nan() {
            assert!(MagicPower::new(f64::NAN).is_err());
        }

        #[test]
        fn saturating_ops_stop_at_max() {
            let power = MagicPower::new(990.0).unwrap();
            assert_eq!(power.saturating_add(50.0).value(), 1000.0);
            assert_eq!(power.saturating_mul(1.3).value(), 1000.0);
            assert!(power.saturating_add(50.0).is_max());
        }
    }

    mod health_points {
        use super::*;

        #[test]
        fn boundaries() {
            assert!(HealthPoints::new(0).is_err());
            assert!(HealthPoints::new(1).is_ok());
            assert!(HealthPoints::new(500).is_ok());
            assert!(HealthPoints::new(501).is_err());
        }

        #[test]
        fn saturating_scale_truncates() {
            let hp = HealthPoints::new(99).unwrap();
            // 99 * 1.2 = 118.8
            assert_eq!(hp.saturating_scale(1.2).value(), 118);
            let near_max = HealthPoints::new(450).unwrap();
            assert_eq!(near_max.saturating_scale(1.2).value(), 500);
        }

        #[test]
        fn serde_revalidates() {
            assert!(serde_json::from_str::<HealthPoints>("0").is_err());
            let hp: HealthPoints = serde_json::from_str("42").unwrap();
            assert_eq!(hp.value(), 42);
        }
    }

    mod discovery_date {
        use super::*;

        #[test]
        fn range_is_inclusive() {
            let today = ymd(2024, 5, 1);
            assert!(DiscoveryDate::new(ymd(1000, 1, 1), today).is_ok());
            assert!(DiscoveryDate::new(today, today).is_ok());
        }

        #[test]
        fn rejects_out_of_range() {
            let today = ymd(2024, 5, 1);
            assert!(DiscoveryDate::new(ymd(999, 12, 31), today).is_err());
            let err = DiscoveryDate::new(ymd(2024, 5, 2), today).unwrap_err();
            assert_eq!(err.field(), Some("discovery_date"));
        }

        #[test]
        fn rejects_far_future_date() {
            let err = DiscoveryDate::new(ymd(9999, 1, 1), ymd(2024, 6, 1)).unwrap_err();
            assert_eq!(err.field(), Some("discovery_date"));
        }

        #[test]
        fn serializes_as_iso_date() {
            let date = DiscoveryDate::new(ymd(1850, 3, 7), ymd(2024, 1, 1)).unwrap();
            assert_eq!(serde_json::to_string(&date).unwrap(), "\"1850-03-07\"");
        }

        #[test]
        fn displays_day_first() {
            let date = DiscoveryDate::new(ymd(1850, 3, 7), ymd(2024, 1, 1)).unwrap();
            assert_eq!(date.to_string(), "07.03.1850");
        }
    }
}
