//! ExportDecisionHandler - Query handler rendering a stored decision.

use std::sync::Arc;
use tracing::debug;

use crate::domain::decision::DecisionError;
use crate::domain::export::{export_table, export_text};
use crate::domain::foundation::DecisionId;
use crate::domain::scoring::ScoringEngine;
use crate::ports::DecisionRepository;

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Table,
}

impl ExportFormat {
    /// Conventional file extension.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Table => "csv",
        }
    }
}

/// Query for one decision's export.
#[derive(Debug, Clone)]
pub struct ExportDecisionQuery {
    pub decision_id: DecisionId,
    pub format: ExportFormat,
}

/// Rendered export.
#[derive(Debug, Clone)]
pub struct ExportDecisionResult {
    pub format: ExportFormat,
    pub content: String,
}

/// Handler for exporting decisions.
pub struct ExportDecisionHandler {
    repository: Arc<dyn DecisionRepository>,
}

impl ExportDecisionHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>) -> Self {
        Self { repository }
    }

    /// Loads the decision, refreshes its totals and renders it.
    ///
    /// The refreshed totals are not written back.
    pub async fn handle(
        &self,
        query: ExportDecisionQuery,
    ) -> Result<ExportDecisionResult, DecisionError> {
        let mut decision = self
            .repository
            .find_by_id(&query.decision_id)
            .await?
            .ok_or(DecisionError::not_found(query.decision_id))?;

        ScoringEngine::recompute_totals(&mut decision);

        let content = match query.format {
            ExportFormat::Text => export_text(&decision),
            ExportFormat::Table => export_table(&decision)
                .map_err(|e| DecisionError::infrastructure(e.to_string()))?,
        };

        debug!(
            decision_id = %query.decision_id,
            format = ?query.format,
            bytes = content.len(),
            "Decision exported"
        );
        Ok(ExportDecisionResult {
            format: query.format,
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::decision::test_support::{two_by_one, MockDecisionRepository};
    use crate::domain::decision::Decision;
    use crate::domain::export::parse_score_rows;

    /// Scored but with stale (zero) cached totals.
    fn stale_car() -> Decision {
        let mut decision = two_by_one();
        let a = *decision.options()[0].id();
        let b = *decision.options()[1].id();
        let price = *decision.criteria()[0].id();
        decision.record_score(&a, &price, 8.0).unwrap();
        decision.record_score(&b, &price, 3.0).unwrap();
        decision
    }

    #[tokio::test]
    async fn text_export_uses_fresh_totals() {
        let decision = stale_car();
        let id = *decision.id();
        let handler =
            ExportDecisionHandler::new(Arc::new(MockDecisionRepository::with_decision(decision)));

        let result = handler
            .handle(ExportDecisionQuery {
                decision_id: id,
                format: ExportFormat::Text,
            })
            .await
            .unwrap();

        assert_eq!(result.format.extension(), "txt");
        assert!(result.content.contains("80.0"));
        assert!(result.content.contains("WINNER: A (Score: 80)"));
    }

    #[tokio::test]
    async fn table_export_round_trips_scores() {
        let decision = stale_car();
        let id = *decision.id();
        let handler =
            ExportDecisionHandler::new(Arc::new(MockDecisionRepository::with_decision(decision)));

        let result = handler
            .handle(ExportDecisionQuery {
                decision_id: id,
                format: ExportFormat::Table,
            })
            .await
            .unwrap();

        assert!(result.content.contains("\nA,80.0\nB,30.0\n"));
        let rows = parse_score_rows(&result.content).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].weighted, 80.0);
    }

    #[tokio::test]
    async fn missing_decision_is_not_found() {
        let handler = ExportDecisionHandler::new(Arc::new(MockDecisionRepository::new()));
        let id = DecisionId::new();

        let err = handler
            .handle(ExportDecisionQuery {
                decision_id: id,
                format: ExportFormat::default(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, DecisionError::NotFound(id));
    }
}
