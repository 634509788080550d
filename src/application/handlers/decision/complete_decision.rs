//! CompleteDecisionHandler - Command handler for closing a decision.
//!
//! A decision can be completed once its structure passes the flow checks
//! and every option has a score for every criterion.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::OptionId;
use crate::domain::scoring::{RankedOption, ScoringEngine};
use crate::domain::validation::validate_decision_flow;
use crate::ports::DecisionRepository;

/// The option that won, captured at completion time.
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub option_id: OptionId,
    pub name: String,
    pub total_score: f64,
}

/// Result of a completed decision.
#[derive(Debug, Clone)]
pub struct CompleteDecisionResult {
    pub winner: Winner,
    pub ranking: Vec<RankedOption>,
}

/// Handler for completing decisions.
pub struct CompleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CompleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        decision: &mut Decision,
    ) -> Result<CompleteDecisionResult, DecisionError> {
        validate_decision_flow(decision)?;

        let progress = ScoringEngine::scoring_progress(decision);
        if !decision.is_fully_scored() {
            return Err(DecisionError::IncompleteScoring {
                recorded: progress.recorded,
                expected: progress.expected,
            });
        }

        ScoringEngine::recompute_totals(decision);
        let winner = ScoringEngine::winner(decision)
            .map(|option| Winner {
                option_id: *option.id(),
                name: option.name().to_string(),
                total_score: option.total_score(),
            })
            .ok_or(DecisionError::IncompleteScoring {
                recorded: progress.recorded,
                expected: progress.expected,
            })?;

        let previous = decision.mark_completed();

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back completion");
            decision.set_status(previous);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(
            decision_id = %decision.id(),
            winner = %winner.name,
            total = winner.total_score,
            "Decision completed"
        );
        Ok(CompleteDecisionResult {
            winner,
            ranking: ScoringEngine::ranking(decision),
        })
    }
}
