//! RecordScoreHandler - Command handler for rating an option on a criterion.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::{CriterionId, DomainError, OptionId, ScoreValue};
use crate::domain::scoring::ScoringEngine;
use crate::ports::DecisionRepository;

/// Command to record (or overwrite) a score.
#[derive(Debug, Clone)]
pub struct RecordScoreCommand {
    pub option_id: OptionId,
    pub criterion_id: CriterionId,
    pub value: f64,
}

/// Result of a recorded score.
#[derive(Debug, Clone)]
pub struct RecordScoreResult {
    /// Value the pair held before, if it was already scored.
    pub previous: Option<ScoreValue>,
    /// The option's weighted total after recomputation.
    pub option_total: f64,
}

/// Handler for recording scores.
pub struct RecordScoreHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl RecordScoreHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Records the score, recomputes every total and saves.
    ///
    /// A failed save restores the pair's previous value (or removes the
    /// score if the pair was unscored) and recomputes the totals again.
    pub async fn handle(
        &self,
        decision: &mut Decision,
        cmd: RecordScoreCommand,
    ) -> Result<RecordScoreResult, DecisionError> {
        let value = ScoreValue::try_new(cmd.value).map_err(DomainError::from)?;
        if decision.option(&cmd.option_id).is_none() {
            return Err(DecisionError::OptionNotFound(cmd.option_id));
        }
        if decision.criterion(&cmd.criterion_id).is_none() {
            return Err(DecisionError::CriterionNotFound(cmd.criterion_id));
        }

        let previous = decision.record_score(&cmd.option_id, &cmd.criterion_id, value.value())?;
        ScoringEngine::recompute_totals(decision);

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back recorded score");
            match previous {
                Some(value) => {
                    decision.record_score(&cmd.option_id, &cmd.criterion_id, value.value())?;
                }
                None => {
                    decision.remove_score(&cmd.option_id, &cmd.criterion_id);
                }
            }
            ScoringEngine::recompute_totals(decision);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        let option_total = decision
            .option(&cmd.option_id)
            .map(|o| o.total_score())
            .unwrap_or_default();

        debug!(
            decision_id = %decision.id(),
            option_id = %cmd.option_id,
            criterion_id = %cmd.criterion_id,
            option_total,
            "Score recorded"
        );
        Ok(RecordScoreResult {
            previous,
            option_total,
        })
    }
}
