//! Field and structural validation for decisions.

use std::collections::HashSet;
use thiserror::Error;

use crate::domain::decision::Decision;
use crate::domain::foundation::{ScoreValue, Weight};

pub const MIN_TITLE_LENGTH: usize = 2;
pub const MAX_TITLE_LENGTH: usize = 100;
pub const MAX_GOAL_LENGTH: usize = 500;
pub const MIN_NAME_LENGTH: usize = 2;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MIN_OPTIONS: usize = 2;
pub const MAX_OPTIONS: usize = 20;
pub const MAX_CRITERIA: usize = 15;

/// Why an option or criterion name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Name cannot be empty")]
    Empty,

    #[error("Name must be at least {} characters", MIN_NAME_LENGTH)]
    TooShort,

    #[error("Name must be {} characters or less", MAX_NAME_LENGTH)]
    TooLong,

    #[error("'{0}' already exists")]
    Duplicate(String),
}

/// Why a decision is not ready to be scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Add at least {} options (found {})", MIN_OPTIONS, .0)]
    TooFewOptions(usize),

    #[error("A decision can have at most {} options (found {})", MAX_OPTIONS, .0)]
    TooManyOptions(usize),

    #[error("Add at least one criterion")]
    NoCriteria,

    #[error("A decision can have at most {} criteria (found {})", MAX_CRITERIA, .0)]
    TooManyCriteria(usize),

    #[error("Option names must be unique")]
    DuplicateOptionNames,

    #[error("Criteria names must be unique")]
    DuplicateCriteriaNames,
}

/// Length in characters, not bytes.
fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Title is valid when its trimmed length is within 2..=100.
pub fn validate_decision_title(title: &str) -> bool {
    (MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&char_len(title.trim()))
}

/// Goal is optional; valid when its trimmed length is at most 500.
pub fn validate_goal(goal: &str) -> bool {
    char_len(goal.trim()) <= MAX_GOAL_LENGTH
}

/// Checks a candidate option name against the names already in the decision.
///
/// Duplicates are detected by exact, case-sensitive comparison of trimmed names.
pub fn validate_option_name<I, S>(name: &str, existing: I) -> Result<(), NameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_name(name, existing)
}

/// Checks a candidate criterion name; same rules as option names.
pub fn validate_criteria_name<I, S>(name: &str, existing: I) -> Result<(), NameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    validate_name(name, existing)
}

fn validate_name<I, S>(name: &str, existing: I) -> Result<(), NameError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let trimmed = name.trim();
    let len = char_len(trimmed);

    if len == 0 {
        return Err(NameError::Empty);
    }
    if len < MIN_NAME_LENGTH {
        return Err(NameError::TooShort);
    }
    if len > MAX_NAME_LENGTH {
        return Err(NameError::TooLong);
    }
    if existing.into_iter().any(|n| n.as_ref().trim() == trimmed) {
        return Err(NameError::Duplicate(trimmed.to_string()));
    }
    Ok(())
}

/// Weight is valid within 1..=10.
pub fn validate_weight(weight: i64) -> bool {
    Weight::try_new(weight).is_ok()
}

/// Score is valid within 1.0..=10.0. NaN is never valid.
pub fn validate_score(score: f64) -> bool {
    ScoreValue::try_new(score).is_ok()
}

/// Checks that a decision has a usable shape before scoring starts.
///
/// Checks run in a fixed order and the first failure is reported.
pub fn validate_decision_flow(decision: &Decision) -> Result<(), FlowError> {
    let options = decision.option_count();
    let criteria = decision.criterion_count();

    if options < MIN_OPTIONS {
        return Err(FlowError::TooFewOptions(options));
    }
    if options > MAX_OPTIONS {
        return Err(FlowError::TooManyOptions(options));
    }
    if criteria == 0 {
        return Err(FlowError::NoCriteria);
    }
    if criteria > MAX_CRITERIA {
        return Err(FlowError::TooManyCriteria(criteria));
    }
    if has_duplicates(decision.option_names()) {
        return Err(FlowError::DuplicateOptionNames);
    }
    if has_duplicates(decision.criterion_names()) {
        return Err(FlowError::DuplicateCriteriaNames);
    }
    Ok(())
}

fn has_duplicates(names: Vec<&str>) -> bool {
    let mut seen = HashSet::new();
    names.into_iter().any(|n| !seen.insert(n.trim()))
}
