//! Score entity - one cell of the option x criterion matrix.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, OptionId, ScoreValue};

/// Rating of one option against one criterion.
///
/// The value is clamped into 1.0..=10.0 on construction and on every
/// assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    option_id: OptionId,
    criterion_id: CriterionId,
    value: ScoreValue,
}

impl Score {
    /// Creates a score, clamping `value` into range.
    pub fn new(option_id: OptionId, criterion_id: CriterionId, value: f64) -> Self {
        Self {
            option_id,
            criterion_id,
            value: ScoreValue::new(value),
        }
    }

    /// Returns the scored option.
    pub fn option_id(&self) -> &OptionId {
        &self.option_id
    }

    /// Returns the criterion this score rates against.
    pub fn criterion_id(&self) -> &CriterionId {
        &self.criterion_id
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.value.value()
    }

    /// Returns the clamped value object.
    pub fn score_value(&self) -> ScoreValue {
        self.value
    }

    /// Assigns a new value, clamping into range. Returns the previous value.
    pub fn set_value(&mut self, value: f64) -> ScoreValue {
        std::mem::replace(&mut self.value, ScoreValue::new(value))
    }
}
