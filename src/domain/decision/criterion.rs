//! Criterion entity - a weighted factor used to evaluate options.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CriterionId, DecisionId, Weight};

/// A weighted factor within a decision.
///
/// # Invariants
///
/// - `weight` is always within 1..=10 (clamped, never rejected)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    id: CriterionId,
    decision_id: DecisionId,
    name: String,
    weight: Weight,
}

impl Criterion {
    /// Creates a criterion. The name is stored trimmed and the weight clamped.
    pub fn new(decision_id: DecisionId, name: impl Into<String>, weight: i64) -> Self {
        Self {
            id: CriterionId::new(),
            decision_id,
            name: name.into().trim().to_string(),
            weight: Weight::new(weight),
        }
    }

    pub fn id(&self) -> &CriterionId {
        &self.id
    }

    /// Returns the owning decision.
    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Renames the criterion. Returns the old name.
    pub fn set_name(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, name.into().trim().to_string())
    }

    /// Assigns a new weight, clamping into range. Returns the old weight.
    pub fn set_weight(&mut self, weight: i64) -> Weight {
        std::mem::replace(&mut self.weight, Weight::new(weight))
    }
}
