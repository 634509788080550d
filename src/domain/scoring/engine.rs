//! Scoring Engine - weighted totals, winner selection and ranking.

use serde::Serialize;

use crate::domain::decision::{Criterion, Decision, DecisionOption};
use crate::domain::foundation::OptionId;

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedOption {
    pub option_id: OptionId,
    pub name: String,
    pub total_score: f64,
    /// 1 = best. Tied totals share a rank.
    pub rank: usize,
    pub fully_scored: bool,
}

/// How many matrix cells have been filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringProgress {
    pub recorded: usize,
    pub expected: usize,
}

impl ScoringProgress {
    /// True when every expected cell has a score.
    pub fn is_complete(&self) -> bool {
        self.recorded == self.expected
    }

    /// Filled fraction in 0.0..=1.0; 0 when nothing is expected.
    pub fn fraction(&self) -> f64 {
        if self.expected == 0 {
            return 0.0;
        }
        self.recorded as f64 / self.expected as f64
    }
}

/// Weighted-sum scoring functions.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes one option's weighted total without caching it.
    ///
    /// # Algorithm
    /// total = Σ(score[criterion] × weight[criterion])
    ///
    /// # Edge Cases
    /// - Missing scores contribute 0; a partial total is still returned
    /// - No criteria: 0
    pub fn option_total(criteria: &[Criterion], option: &DecisionOption) -> f64 {
        criteria
            .iter()
            .filter_map(|criterion| {
                option
                    .score_for(criterion.id())
                    .map(|score| score.value() * criterion.weight().as_f64())
            })
            .sum()
    }

    /// Recomputes and overwrites the cached total of every option.
    ///
    /// This is a batch pass; editing a single score never updates a total
    /// on its own.
    pub fn recompute_totals(decision: &mut Decision) {
        let totals: Vec<f64> = decision
            .options()
            .iter()
            .map(|option| Self::option_total(decision.criteria(), option))
            .collect();

        for (option, total) in decision.options_mut().iter_mut().zip(totals) {
            option.set_total_score(total);
        }
    }

    /// True when the option has one score per criterion of the decision.
    pub fn is_scoring_complete(decision: &Decision, option: &DecisionOption) -> bool {
        decision.is_option_fully_scored(option)
    }

    /// The current winner, read from cached totals.
    ///
    /// Only available once every option is fully scored. Ties go to the
    /// option inserted first.
    pub fn winner(decision: &Decision) -> Option<&DecisionOption> {
        decision.winner()
    }

    /// Options ordered by cached total, best first.
    ///
    /// Equal totals keep insertion order and share a rank (1, 1, 3).
    pub fn ranking(decision: &Decision) -> Vec<RankedOption> {
        let mut ordered: Vec<&DecisionOption> = decision.options().iter().collect();
        ordered.sort_by(|a, b| b.total_score().total_cmp(&a.total_score()));

        let mut ranking: Vec<RankedOption> = Vec::with_capacity(ordered.len());
        for (index, option) in ordered.into_iter().enumerate() {
            let rank = match ranking.last() {
                Some(prev) if prev.total_score == option.total_score() => prev.rank,
                _ => index + 1,
            };
            ranking.push(RankedOption {
                option_id: *option.id(),
                name: option.name().to_string(),
                total_score: option.total_score(),
                rank,
                fully_scored: decision.is_option_fully_scored(option),
            });
        }
        ranking
    }

    /// Recorded vs expected matrix cells.
    pub fn scoring_progress(decision: &Decision) -> ScoringProgress {
        let expected = decision.option_count() * decision.criterion_count();
        let recorded = decision
            .options()
            .iter()
            .map(|option| {
                decision
                    .criteria()
                    .iter()
                    .filter(|c| option.score_for(c.id()).is_some())
                    .count()
            })
            .sum();
        ScoringProgress { recorded, expected }
    }
}
