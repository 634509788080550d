//! CreateDecisionHandler - Command handler for starting a new decision.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::validation::{
    validate_decision_title, validate_goal, MAX_GOAL_LENGTH, MAX_TITLE_LENGTH, MIN_TITLE_LENGTH,
};
use crate::ports::DecisionRepository;

/// Command to create a new decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub title: String,
    pub goal: String,
}

/// Result of successful decision creation.
#[derive(Debug, Clone)]
pub struct CreateDecisionResult {
    pub decision: Decision,
}

/// Handler for creating decisions.
pub struct CreateDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl CreateDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateDecisionCommand,
    ) -> Result<CreateDecisionResult, DecisionError> {
        if !validate_decision_title(&cmd.title) {
            return Err(DecisionError::validation(
                "title",
                format!(
                    "Title must be between {} and {} characters",
                    MIN_TITLE_LENGTH, MAX_TITLE_LENGTH
                ),
            ));
        }
        if !validate_goal(&cmd.goal) {
            return Err(DecisionError::validation(
                "goal",
                format!("Goal must be at most {} characters", MAX_GOAL_LENGTH),
            ));
        }

        let decision = Decision::new(cmd.title, cmd.goal);

        if let Err(err) = self.repository.save(&decision).await {
            warn!(error = %err, "Failed to persist new decision");
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(decision_id = %decision.id(), title = decision.title(), "Decision created");
        Ok(CreateDecisionResult { decision })
    }
}
