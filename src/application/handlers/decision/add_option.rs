//! AddOptionHandler - Command handler for appending an option.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::decision::{Decision, DecisionError};
use crate::domain::foundation::OptionId;
use crate::domain::scoring::ScoringEngine;
use crate::domain::validation::{validate_option_name, FlowError, MAX_OPTIONS};
use crate::ports::DecisionRepository;

/// Command to add an option to a decision.
#[derive(Debug, Clone)]
pub struct AddOptionCommand {
    pub name: String,
}

/// Result of a successful add.
#[derive(Debug, Clone)]
pub struct AddOptionResult {
    pub option_id: OptionId,
}

/// Handler for adding options.
pub struct AddOptionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl AddOptionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Validates the name, appends the option and saves the decision.
    ///
    /// On save failure the option is removed again before returning.
    pub async fn handle(
        &self,
        decision: &mut Decision,
        cmd: AddOptionCommand,
    ) -> Result<AddOptionResult, DecisionError> {
        validate_option_name(&cmd.name, decision.option_names())
            .map_err(|e| DecisionError::name("option_name", e))?;
        if decision.option_count() >= MAX_OPTIONS {
            return Err(FlowError::TooManyOptions(decision.option_count() + 1).into());
        }

        let option_id = decision.add_option(cmd.name);
        ScoringEngine::recompute_totals(decision);

        if let Err(err) = self.repository.save(decision).await {
            warn!(decision_id = %decision.id(), error = %err, "Rolling back added option");
            decision.remove_option(&option_id);
            return Err(DecisionError::infrastructure(err.to_string()));
        }

        debug!(decision_id = %decision.id(), option_id = %option_id, "Option added");
        Ok(AddOptionResult { option_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::decision::test_support::{two_by_one, MockDecisionRepository};
    use crate::domain::validation::NameError;

    fn command(name: &str) -> AddOptionCommand {
        AddOptionCommand {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn adds_option_and_saves() {
        let repo = Arc::new(MockDecisionRepository::new());
        let handler = AddOptionHandler::new(repo.clone());
        let mut decision = two_by_one();

        let result = handler.handle(&mut decision, command(" Coupe ")).await.unwrap();

        let option = decision.option(&result.option_id).unwrap();
        assert_eq!(option.name(), "Coupe");
        assert_eq!(option.total_score(), 0.0);
        assert_eq!(repo.stored(decision.id()), Some(decision));
    }

    #[tokio::test]
    async fn duplicate_name_is_rejected_without_saving() {
        let repo = Arc::new(MockDecisionRepository::new());
        let handler = AddOptionHandler::new(repo.clone());
        let mut decision = two_by_one();
        decision.add_option("Coupe");

        let err = handler.handle(&mut decision, command("Coupe")).await.unwrap_err();

        assert_eq!(
            err,
            DecisionError::name("option_name", NameError::Duplicate("Coupe".to_string()))
        );
        assert_eq!(decision.option_count(), 3);
        assert_eq!(repo.save_calls(), 0);
    }

    #[tokio::test]
    async fn twenty_first_option_is_rejected() {
        let handler = AddOptionHandler::new(Arc::new(MockDecisionRepository::new()));
        let mut decision = Decision::new("Many", "");
        for i in 0..MAX_OPTIONS {
            decision.add_option(format!("Option {}", i));
        }

        let err = handler.handle(&mut decision, command("One more")).await.unwrap_err();

        assert_eq!(err, DecisionError::InvalidFlow(FlowError::TooManyOptions(21)));
    }

    #[tokio::test]
    async fn save_failure_rolls_back() {
        let handler = AddOptionHandler::new(Arc::new(MockDecisionRepository::failing()));
        let mut decision = two_by_one();
        let before = decision.clone();

        let err = handler.handle(&mut decision, command("Coupe")).await.unwrap_err();

        assert!(matches!(err, DecisionError::Infrastructure(_)));
        assert_eq!(decision, before);
    }
}
