//! RemoveOptionHandler - Command handler for deleting an option and its scores.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::OptionId;
use crate::ports::DecisionRepository;

/// Command to remove an option.
#[derive(Debug, Clone)]
pub struct RemoveOptionCommand {
    pub option_id: OptionId,
}

/// Result of a removal.
#[derive(Debug, Clone)]
pub struct RemoveOptionResult {
    pub removed_scores: usize,
}

/// Handler for removing options.
pub struct RemoveOptionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl RemoveOptionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        decision: &mut Decision,
        cmd: RemoveOptionCommand,
    ) -> Result<RemoveOptionResult, DecisionError> {
        let removed = decision
            .remove_option(&cmd.option_id)
            .ok_or(DecisionError::OptionNotFound(cmd.option_id))?;
        let removed_scores = removed.option.score_count();

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back option removal");
            decision.restore_option(removed);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(
            decision_id = %decision.id(),
            option_id = %cmd.option_id,
            removed_scores,
            "Option removed"
        );
        Ok(RemoveOptionResult { removed_scores })
    }
}
