//! RemoveCriterionHandler - Command handler for deleting a criterion.
//!
//! Removing a criterion cascades to every score that references it, so
//! totals are recomputed afterwards.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::CriterionId;
use crate::domain::scoring::ScoringEngine;
use crate::ports::DecisionRepository;

/// Command to remove a criterion.
#[derive(Debug, Clone)]
pub struct RemoveCriterionCommand {
    pub criterion_id: CriterionId,
}

/// Result of a removal.
#[derive(Debug, Clone)]
pub struct RemoveCriterionResult {
    pub removed_scores: usize,
}

/// Handler for removing criteria.
pub struct RemoveCriterionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl RemoveCriterionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        decision: &mut Decision,
        cmd: RemoveCriterionCommand,
    ) -> Result<RemoveCriterionResult, DecisionError> {
        let removed = decision
            .remove_criterion(&cmd.criterion_id)
            .ok_or(DecisionError::CriterionNotFound(cmd.criterion_id))?;
        let removed_scores = removed.scores.len();
        ScoringEngine::recompute_totals(decision);

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back criterion removal");
            decision.restore_criterion(removed);
            ScoringEngine::recompute_totals(decision);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(
            decision_id = %decision.id(),
            criterion_id = %cmd.criterion_id,
            removed_scores,
            "Criterion removed"
        );
        Ok(RemoveCriterionResult { removed_scores })
    }
}
