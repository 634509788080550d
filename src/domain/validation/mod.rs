//! Validation Rules - pure predicates that gate every model mutation.
//!
//! Nothing here mutates a decision. Callers run the relevant check, then
//! apply the change through the aggregate.

mod rules;

pub use rules::{
    validate_criteria_name, validate_decision_flow, validate_decision_title, validate_goal,
    validate_option_name, validate_score, validate_weight, FlowError, NameError,
    MAX_CRITERIA, MAX_GOAL_LENGTH, MAX_NAME_LENGTH, MAX_OPTIONS, MAX_TITLE_LENGTH,
    MIN_NAME_LENGTH, MIN_OPTIONS, MIN_TITLE_LENGTH,
};
