//! Score value object (1.0-10.0 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// Rating of one option against one criterion, always within 1.0..=10.0.
///
/// Construction clamps; NaN becomes the minimum.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct ScoreValue(f64);

impl ScoreValue {
    /// Lowest allowed score.
    pub const MIN: f64 = 1.0;

    /// Highest allowed score.
    pub const MAX: f64 = 10.0;

    /// Creates a new ScoreValue, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(Self::MIN);
        }
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a ScoreValue, returning error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range_decimal(
                "score",
                Self::MIN,
                Self::MAX,
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for ScoreValue {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

impl From<f64> for ScoreValue {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<ScoreValue> for f64 {
    fn from(score: ScoreValue) -> Self {
        score.0
    }
}

impl fmt::Display for ScoreValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}
