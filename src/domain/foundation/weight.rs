//! Weight value object for criteria (1-10 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Importance of a criterion, always within 1..=10.
///
/// Any integer is accepted at construction and clamped into range, so a
/// `Weight` can never hold an out-of-range value. Deserialization clamps too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Weight(u8);

impl Weight {
    /// Lowest allowed weight.
    pub const MIN: i64 = 1;

    /// Highest allowed weight.
    pub const MAX: i64 = 10;

    /// Creates a new Weight, clamping to the valid range.
    pub fn new(value: i64) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX) as u8)
    }

    /// Creates a Weight, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "weight",
                Self::MIN as i32,
                Self::MAX as i32,
                value.clamp(i32::MIN as i64, i32::MAX as i64) as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the integer value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the weight as a multiplier.
    pub fn as_f64(&self) -> f64 {
        f64::from(self.0)
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self(5)
    }
}

impl From<i64> for Weight {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl From<Weight> for i64 {
    fn from(weight: Weight) -> Self {
        i64::from(weight.0)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
