//! Decision-specific error types.

use crate::domain::foundation::{CriterionId, DecisionId, DomainError, ErrorCode, OptionId};
use crate::domain::validation::{FlowError, NameError};

/// Errors surfaced by decision workflows.
#[derive(Debug, Clone, PartialEq)]
pub enum DecisionError {
    /// Decision was not found.
    NotFound(DecisionId),
    /// Option is not part of the decision.
    OptionNotFound(OptionId),
    /// Criterion is not part of the decision.
    CriterionNotFound(CriterionId),
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Decision is not ready for the requested step.
    InvalidFlow(FlowError),
    /// Some option is missing a score.
    IncompleteScoring { recorded: usize, expected: usize },
    /// Persistence failed; the in-memory change was rolled back.
    Infrastructure(String),
}

impl DecisionError {
    pub fn not_found(id: DecisionId) -> Self {
        DecisionError::NotFound(id)
    }
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }
    pub fn name(field: impl Into<String>, err: NameError) -> Self {
        DecisionError::validation(field, err.to_string())
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        DecisionError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound(_) => ErrorCode::DecisionNotFound,
            DecisionError::OptionNotFound(_) => ErrorCode::OptionNotFound,
            DecisionError::CriterionNotFound(_) => ErrorCode::CriterionNotFound,
            DecisionError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            DecisionError::InvalidFlow(_) => ErrorCode::ValidationFailed,
            DecisionError::IncompleteScoring { .. } => ErrorCode::IncompleteScoring,
            DecisionError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            DecisionError::NotFound(id) => format!("Decision not found: {}", id),
            DecisionError::OptionNotFound(id) => format!("Option not found: {}", id),
            DecisionError::CriterionNotFound(id) => format!("Criterion not found: {}", id),
            DecisionError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            DecisionError::InvalidFlow(err) => err.to_string(),
            DecisionError::IncompleteScoring { recorded, expected } => {
                format!("Scoring incomplete: {} of {} scores recorded", recorded, expected)
            }
            DecisionError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for DecisionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for DecisionError {}

impl From<FlowError> for DecisionError {
    fn from(err: FlowError) -> Self {
        DecisionError::InvalidFlow(err)
    }
}

impl From<DomainError> for DecisionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::ValidationFailed | ErrorCode::OutOfRange => {
                DecisionError::ValidationFailed {
                    field: err
                        .details
                        .get("field")
                        .cloned()
                        .unwrap_or_else(|| "unknown".to_string()),
                    message: err.message,
                }
            }
            ErrorCode::IncompleteScoring => DecisionError::IncompleteScoring {
                recorded: parse_detail(&err, "recorded"),
                expected: parse_detail(&err, "expected"),
            },
            _ => DecisionError::Infrastructure(err.to_string()),
        }
    }
}

fn parse_detail(err: &DomainError, key: &str) -> usize {
    err.details
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}
