//! ScoringMethod enum tagging how a decision is evaluated.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scoring method used by a decision.
///
/// Linear weighted-sum over a criteria matrix is the only supported method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ScoringMethod {
    #[default]
    Matrix,
}

impl ScoringMethod {
    /// All known methods, in enumeration order.
    pub const ALL: [ScoringMethod; 1] = [ScoringMethod::Matrix];

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            ScoringMethod::Matrix => "Matrix",
        }
    }
}

impl fmt::Display for ScoringMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
