//! AddCriterionHandler - Command handler for appending a weighted criterion.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{CriterionId, DomainError, Weight};
use crate::domain::scoring::ScoringEngine;
use crate::domain::validation::{validate_criteria_name, FlowError, MAX_CRITERIA};
use crate::ports::DecisionRepository;

/// Command to add a criterion to a decision.
#[derive(Debug, Clone)]
pub struct AddCriterionCommand {
    pub name: String,
    pub weight: i64,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddCriterionResult {
    pub criterion_id: CriterionId,
}

/// Handler for adding criteria.
pub struct AddCriterionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl AddCriterionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        decision: &mut Decision,
        cmd: AddCriterionCommand,
    ) -> Result<AddCriterionResult, DecisionError> {
        validate_criteria_name(&cmd.name, decision.criterion_names())
            .map_err(|e| DecisionError::name("criterion_name", e))?;
        let weight = Weight::try_new(cmd.weight).map_err(DomainError::from)?;
        if decision.criterion_count() >= MAX_CRITERIA {
            return Err(FlowError::TooManyCriteria(decision.criterion_count() + 1).into());
        }

        let criterion_id = decision.add_criterion(cmd.name, i64::from(weight));
        ScoringEngine::recompute_totals(decision);

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back added criterion");
            decision.remove_criterion(&criterion_id);
            ScoringEngine::recompute_totals(decision);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(decision_id = %decision.id(), criterion_id = %criterion_id, "Criterion added");
        Ok(AddCriterionResult { criterion_id })
    }
}
