//! DeleteDecisionHandler - Command handler for removing a decision.

use std::sync::Arc;
use tracing::debug;

use crate::domain::decision::DecisionError;
use crate::domain::foundation::{DecisionId, ErrorCode};
use crate::ports::DecisionRepository;

/// Command to delete a decision and everything it owns.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub decision_id: DecisionId,
}

/// Handler for deleting decisions.
pub struct DeleteDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl DeleteDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DecisionError> {
        match self.repository.delete(&cmd.decision_id).await {
            Ok(()) => {
                debug!(decision_id = %cmd.decision_id, "Decision deleted");
                Ok(())
            }
            Err(err) if err.code == ErrorCode::DecisionNotFound => {
                Err(DecisionError::not_found(cmd.decision_id))
            }
            Err(err) => Err(DecisionError::infrastructure(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::decision::test_support::{two_by_one, MockDecisionRepository};

    #[tokio::test]
    async fn deletes_stored_decision() {
        let decision = two_by_one();
        let id = *decision.id();
        let repo = Arc::new(MockDecisionRepository::with_decision(decision));
        let handler = DeleteDecisionHandler::new(repo.clone());

        handler
            .handle(DeleteDecisionCommand { decision_id: id })
            .await
            .unwrap();

        assert!(repo.stored(&id).is_none());
    }

    #[tokio::test]
    async fn missing_decision_is_not_found() {
        let handler = DeleteDecisionHandler::new(Arc::new(MockDecisionRepository::new()));
        let id = DecisionId::new();

        let err = handler
            .handle(DeleteDecisionCommand { decision_id: id })
            .await
            .unwrap_err();

        assert_eq!(err, DecisionError::NotFound(id));
    }

    #[tokio::test]
    async fn storage_failure_is_infrastructure_error() {
        let handler = DeleteDecisionHandler::new(Arc::new(MockDecisionRepository::failing()));

        let err = handler
            .handle(DeleteDecisionCommand {
                decision_id: DecisionId::new(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, DecisionError::Infrastructure(_)));
    }
}
