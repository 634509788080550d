//! Decision aggregate.
//!
//! A decision owns its options and criteria; options own their scores.
//! Removing an option or a criterion cascades to every score that
//! references it, and deleting the decision drops everything it owns.
//!
//! The aggregate clamps weights and score values but does not validate
//! names or counts. Callers run `domain::validation` before mutating.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Criterion, DecisionOption, Score};
use crate::domain::foundation::{
    CriterionId, DecisionId, DecisionStatus, DomainError, ErrorCode, OptionId, ScoreValue,
    ScoringMethod, Timestamp,
};

/// Decision aggregate - a structured choice session.
///
/// # Invariants
///
/// - `id` is globally unique and never changes
/// - at most one score exists per (option, criterion) pair
/// - every score references a criterion of this decision
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    id: DecisionId,
    title: String,
    #[serde(default)]
    goal: String,
    created_at: Timestamp,
    #[serde(default)]
    status: DecisionStatus,
    #[serde(default)]
    method: ScoringMethod,
    #[serde(default)]
    options: Vec<DecisionOption>,
    #[serde(default)]
    criteria: Vec<Criterion>,
}

/// An option detached from its decision, kept so the removal can be undone.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedOption {
    pub index: usize,
    pub option: DecisionOption,
}

/// A criterion detached from its decision together with the scores that
/// cascaded with it.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedCriterion {
    pub index: usize,
    pub criterion: Criterion,
    /// (option, position within the option's scores, score)
    pub scores: Vec<(OptionId, usize, Score)>,
}

impl Decision {
    /// Create a new in-progress decision. Title and goal are stored trimmed.
    pub fn new(title: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            id: DecisionId::new(),
            title: title.into().trim().to_string(),
            goal: goal.into().trim().to_string(),
            created_at: Timestamp::now(),
            status: DecisionStatus::InProgress,
            method: ScoringMethod::Matrix,
            options: Vec::new(),
            criteria: Vec::new(),
        }
    }

    /// Reconstitute a decision from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: DecisionId,
        title: String,
        goal: String,
        created_at: Timestamp,
        status: DecisionStatus,
        method: ScoringMethod,
        options: Vec<DecisionOption>,
        criteria: Vec<Criterion>,
    ) -> Self {
        Self {
            id,
            title,
            goal,
            created_at,
            status,
            method,
            options,
            criteria,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the decision ID.
    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    /// Returns the decision title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the goal, empty when none was given.
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Returns when the decision was created.
    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn status(&self) -> DecisionStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    pub fn method(&self) -> ScoringMethod {
        self.method
    }

    /// Options in insertion order.
    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    /// Criteria in insertion order.
    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn criterion_count(&self) -> usize {
        self.criteria.len()
    }

    pub fn option(&self, id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| o.id() == id)
    }

    pub fn option_mut(&mut self, id: &OptionId) -> Option<&mut DecisionOption> {
        self.options.iter_mut().find(|o| o.id() == id)
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.id() == id)
    }

    pub fn criterion_mut(&mut self, id: &CriterionId) -> Option<&mut Criterion> {
        self.criteria.iter_mut().find(|c| c.id() == id)
    }

    /// Trimmed option names, in insertion order.
    pub fn option_names(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.name()).collect()
    }

    /// Trimmed criterion names, in insertion order.
    pub fn criterion_names(&self) -> Vec<&str> {
        self.criteria.iter().map(|c| c.name()).collect()
    }

    /// All scores recorded against one criterion, in option order.
    pub fn scores_for_criterion(&self, criterion_id: &CriterionId) -> Vec<&Score> {
        self.options
            .iter()
            .filter_map(|o| o.score_for(criterion_id))
            .collect()
    }

    pub(crate) fn options_mut(&mut self) -> &mut [DecisionOption] {
        &mut self.options
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the title. Returns the old title.
    pub fn set_title(&mut self, title: impl Into<String>) -> String {
        std::mem::replace(&mut self.title, title.into().trim().to_string())
    }

    /// Replaces the goal. Returns the old goal.
    pub fn set_goal(&mut self, goal: impl Into<String>) -> String {
        std::mem::replace(&mut self.goal, goal.into().trim().to_string())
    }

    /// Sets the status. Returns the previous status.
    pub fn set_status(&mut self, status: DecisionStatus) -> DecisionStatus {
        std::mem::replace(&mut self.status, status)
    }

    /// Marks the decision completed. Returns the previous status.
    pub fn mark_completed(&mut self) -> DecisionStatus {
        self.set_status(DecisionStatus::Completed)
    }

    /// Appends an option and returns its id.
    pub fn add_option(&mut self, name: impl Into<String>) -> OptionId {
        let option = DecisionOption::new(self.id, name);
        let id = *option.id();
        self.options.push(option);
        id
    }

    /// Removes an option and, with it, all of its scores.
    pub fn remove_option(&mut self, id: &OptionId) -> Option<RemovedOption> {
        let index = self.options.iter().position(|o| o.id() == id)?;
        let option = self.options.remove(index);
        Some(RemovedOption { index, option })
    }

    /// Undoes `remove_option`.
    pub fn restore_option(&mut self, removed: RemovedOption) {
        let index = removed.index.min(self.options.len());
        self.options.insert(index, removed.option);
    }

    /// Appends a criterion (weight clamped) and returns its id.
    pub fn add_criterion(&mut self, name: impl Into<String>, weight: i64) -> CriterionId {
        let criterion = Criterion::new(self.id, name, weight);
        let id = *criterion.id();
        self.criteria.push(criterion);
        id
    }

    /// Removes a criterion and every score that references it.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Option<RemovedCriterion> {
        let index = self.criteria.iter().position(|c| c.id() == id)?;
        let criterion = self.criteria.remove(index);

        let scores = self
            .options
            .iter_mut()
            .filter_map(|option| {
                let owner = *option.id();
                option
                    .take_score(id)
                    .map(|(position, score)| (owner, position, score))
            })
            .collect();

        Some(RemovedCriterion {
            index,
            criterion,
            scores,
        })
    }

    /// Undoes `remove_criterion`, including the cascaded scores.
    pub fn restore_criterion(&mut self, removed: RemovedCriterion) {
        let index = removed.index.min(self.criteria.len());
        self.criteria.insert(index, removed.criterion);
        for (option_id, position, score) in removed.scores {
            if let Some(option) = self.option_mut(&option_id) {
                option.restore_score(position, score);
            }
        }
    }

    /// Records a score for an (option, criterion) pair.
    ///
    /// Looks up the pair first and updates the existing score in place,
    /// so at most one score exists per pair. Returns the previous value.
    ///
    /// # Errors
    ///
    /// - `OptionNotFound` if the option is not part of this decision
    /// - `CriterionNotFound` if the criterion is not part of this decision
    pub fn record_score(
        &mut self,
        option_id: &OptionId,
        criterion_id: &CriterionId,
        value: f64,
    ) -> Result<Option<ScoreValue>, DomainError> {
        if self.criterion(criterion_id).is_none() {
            return Err(DomainError::new(
                ErrorCode::CriterionNotFound,
                format!("Criterion not found: {}", criterion_id),
            ));
        }
        let option = self.option_mut(option_id).ok_or_else(|| {
            DomainError::new(
                ErrorCode::OptionNotFound,
                format!("Option not found: {}", option_id),
            )
        })?;
        Ok(option.upsert_score(*criterion_id, value))
    }

    /// Deletes the score for a pair, if any.
    pub fn remove_score(&mut self, option_id: &OptionId, criterion_id: &CriterionId) -> Option<Score> {
        self.option_mut(option_id)?
            .take_score(criterion_id)
            .map(|(_, score)| score)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived queries
    // ─────────────────────────────────────────────────────────────────────────

    /// True when `option` has exactly one score for every criterion of this
    /// decision (compared by criterion id, not just by count).
    pub fn is_option_fully_scored(&self, option: &DecisionOption) -> bool {
        let expected: HashSet<CriterionId> = self.criteria.iter().map(|c| *c.id()).collect();
        option.score_count() == expected.len() && option.scored_criteria() == expected
    }

    /// True when every option is fully scored.
    pub fn is_fully_scored(&self) -> bool {
        self.options.iter().all(|o| self.is_option_fully_scored(o))
    }

    /// The option with the highest cached total.
    ///
    /// Returns `None` when there are no options or any option is missing a
    /// score. Ties go to the option inserted first. Totals are read as
    /// cached, so run `ScoringEngine::recompute_totals` first.
    pub fn winner(&self) -> Option<&DecisionOption> {
        if self.options.is_empty() || !self.is_fully_scored() {
            return None;
        }

        let mut best: Option<&DecisionOption> = None;
        for option in &self.options {
            match best {
                Some(current) if option.total_score() <= current.total_score() => {}
                _ => best = Some(option),
            }
        }
        best
    }
}
