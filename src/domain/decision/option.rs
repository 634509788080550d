//! DecisionOption entity - one candidate under consideration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::Score;
use crate::domain::foundation::{CriterionId, DecisionId, OptionId, ScoreValue};

/// A candidate choice, owning its scores.
///
/// `total_score` is a cache: it is only correct after the scoring engine
/// has recomputed it, and is not touched when individual scores change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    id: OptionId,
    decision_id: DecisionId,
    name: String,
    #[serde(default)]
    total_score: f64,
    #[serde(default)]
    scores: Vec<Score>,
}

impl DecisionOption {
    /// Creates an option with no scores. The name is stored trimmed.
    pub fn new(decision_id: DecisionId, name: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(),
            decision_id,
            name: name.into().trim().to_string(),
            total_score: 0.0,
            scores: Vec::new(),
        }
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    /// Returns the owning decision.
    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the cached total (possibly stale).
    pub fn total_score(&self) -> f64 {
        self.total_score
    }

    pub fn scores(&self) -> &[Score] {
        &self.scores
    }

    pub fn score_count(&self) -> usize {
        self.scores.len()
    }

    /// Renames the option. Returns the old name.
    pub fn set_name(&mut self, name: impl Into<String>) -> String {
        std::mem::replace(&mut self.name, name.into().trim().to_string())
    }

    /// Overwrites the cached total.
    pub fn set_total_score(&mut self, total: f64) {
        self.total_score = total;
    }

    /// Finds the score recorded against `criterion_id`.
    pub fn score_for(&self, criterion_id: &CriterionId) -> Option<&Score> {
        self.scores.iter().find(|s| s.criterion_id() == criterion_id)
    }

    /// Returns the ids of every criterion this option has a score for.
    pub fn scored_criteria(&self) -> HashSet<CriterionId> {
        self.scores.iter().map(|s| *s.criterion_id()).collect()
    }

    /// Records a score, updating in place when one already exists for the
    /// criterion. Returns the previous value if there was one.
    pub(crate) fn upsert_score(&mut self, criterion_id: CriterionId, value: f64) -> Option<ScoreValue> {
        if let Some(existing) = self
            .scores
            .iter_mut()
            .find(|s| s.criterion_id() == &criterion_id)
        {
            return Some(existing.set_value(value));
        }
        self.scores.push(Score::new(self.id, criterion_id, value));
        None
    }

    /// Removes the score for `criterion_id`, returning it with its position.
    pub(crate) fn take_score(&mut self, criterion_id: &CriterionId) -> Option<(usize, Score)> {
        let index = self
            .scores
            .iter()
            .position(|s| s.criterion_id() == criterion_id)?;
        Some((index, self.scores.remove(index)))
    }

    /// Puts a previously taken score back at its original position.
    pub(crate) fn restore_score(&mut self, index: usize, score: Score) {
        let index = index.min(self.scores.len());
        self.scores.insert(index, score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn option() -> DecisionOption {
        DecisionOption::new(DecisionId::new(), " Option A ")
    }

    #[test]
    fn new_option_has_trimmed_name_and_zero_total() {
        let option = option();
        assert_eq!(option.name(), "Option A");
        assert_eq!(option.total_score(), 0.0);
        assert!(option.scores().is_empty());
    }

    #[test]
    fn upsert_inserts_then_updates_in_place() {
        let mut option = option();
        let criterion = CriterionId::new();

        assert!(option.upsert_score(criterion, 6.0).is_none());
        let previous = option.upsert_score(criterion, 9.0);

        assert_eq!(previous.map(|v| v.value()), Some(6.0));
        assert_eq!(option.score_count(), 1);
        assert_eq!(option.score_for(&criterion).unwrap().value(), 9.0);
    }

    #[test]
    fn upserted_score_references_owner() {
        let mut option = option();
        let criterion = CriterionId::new();
        option.upsert_score(criterion, 3.0);
        let score = option.score_for(&criterion).unwrap();
        assert_eq!(score.option_id(), option.id());
    }

    #[test]
    fn take_and_restore_score_preserves_position() {
        let mut option = option();
        let first = CriterionId::new();
        let second = CriterionId::new();
        option.upsert_score(first, 2.0);
        option.upsert_score(second, 3.0);

        let (index, taken) = option.take_score(&first).unwrap();
        assert_eq!(index, 0);
        assert_eq!(option.score_count(), 1);

        option.restore_score(index, taken);
        assert_eq!(option.scores()[0].criterion_id(), &first);
    }

    #[test]
    fn setting_total_does_not_touch_scores() {
        let mut option = option();
        option.set_total_score(42.0);
        assert_eq!(option.total_score(), 42.0);
        assert!(option.scores().is_empty());
    }
}
