//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the decision matrix domain.

mod decision_status;
mod errors;
mod ids;
mod score_value;
mod scoring_method;
mod timestamp;
mod weight;

pub use decision_status::DecisionStatus;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, DecisionId, OptionId};
pub use score_value::ScoreValue;
pub use scoring_method::ScoringMethod;
pub use timestamp::Timestamp;
pub use weight::Weight;
