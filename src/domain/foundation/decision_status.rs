//! DecisionStatus enum for tracking whether a decision has been concluded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion state of a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DecisionStatus {
    #[default]
    InProgress,
    Completed,
}

impl DecisionStatus {
    /// Returns true once the decision has been marked complete.
    pub fn is_completed(&self) -> bool {
        matches!(self, DecisionStatus::Completed)
    }
}

impl fmt::Display for DecisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionStatus::InProgress => "In Progress",
            DecisionStatus::Completed => "Completed",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_in_progress() {
        assert_eq!(DecisionStatus::default(), DecisionStatus::InProgress);
        assert!(!DecisionStatus::default().is_completed());
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(DecisionStatus::InProgress.to_string(), "In Progress");
        assert_eq!(DecisionStatus::Completed.to_string(), "Completed");
    }

    #[test]
    fn serializes_snake_case() {
        let json = serde_json::to_string(&DecisionStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }
}
