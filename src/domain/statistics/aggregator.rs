//! Statistics Aggregator - counts, averages, most-used method and recency.

use chrono::{DateTime, Duration, TimeZone};
use serde::Serialize;
use std::collections::HashMap;

use crate::domain::decision::Decision;
use crate::domain::foundation::ScoringMethod;

/// Number of calendar days, today included, that count as "recent".
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// Summary metrics over a collection of decisions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionStatistics {
    pub total_decisions: usize,
    pub completed_decisions: usize,
    pub active_decisions: usize,
    pub total_options: usize,
    pub total_criteria: usize,
    pub average_options_per_decision: f64,
    pub average_criteria_per_decision: f64,
    /// `None` when there are no decisions.
    pub most_used_method: Option<ScoringMethod>,
    /// Decisions created within the trailing window, today included.
    pub recent_decisions: usize,
}

/// Cross-decision aggregation functions.
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// Computes statistics as of `now`.
    ///
    /// `now` carries the caller's time zone; creation instants are converted
    /// into it before comparing calendar dates, so "today" is the caller's
    /// local day.
    ///
    /// # Edge Cases
    /// - No decisions: every count and both averages are 0
    /// - Method tie: the method listed first in `ScoringMethod::ALL` wins
    /// - Created after today (clock skew): not recent
    pub fn compute<Tz: TimeZone>(decisions: &[Decision], now: &DateTime<Tz>) -> DecisionStatistics {
        let total = decisions.len();
        let completed = decisions.iter().filter(|d| d.is_completed()).count();
        let total_options: usize = decisions.iter().map(|d| d.option_count()).sum();
        let total_criteria: usize = decisions.iter().map(|d| d.criterion_count()).sum();

        DecisionStatistics {
            total_decisions: total,
            completed_decisions: completed,
            active_decisions: total - completed,
            total_options,
            total_criteria,
            average_options_per_decision: Self::average(total_options, total),
            average_criteria_per_decision: Self::average(total_criteria, total),
            most_used_method: Self::most_used_method(decisions),
            recent_decisions: Self::count_recent(decisions, now),
        }
    }

    fn average(sum: usize, count: usize) -> f64 {
        if count == 0 {
            return 0.0;
        }
        sum as f64 / count as f64
    }

    fn most_used_method(decisions: &[Decision]) -> Option<ScoringMethod> {
        let mut counts: HashMap<ScoringMethod, usize> = HashMap::new();
        for decision in decisions {
            *counts.entry(decision.method()).or_insert(0) += 1;
        }

        let mut best: Option<(ScoringMethod, usize)> = None;
        for method in ScoringMethod::ALL {
            let count = counts.get(&method).copied().unwrap_or(0);
            if count == 0 {
                continue;
            }
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((method, count)),
            }
        }
        best.map(|(method, _)| method)
    }

    fn count_recent<Tz: TimeZone>(decisions: &[Decision], now: &DateTime<Tz>) -> usize {
        let tz = now.timezone();
        let today = now.date_naive();
        let window_start = today - Duration::days(RECENT_WINDOW_DAYS - 1);

        decisions
            .iter()
            .map(|d| d.created_at().date_in(&tz))
            .filter(|created| *created >= window_start && *created <= today)
            .count()
    }
}

/// Convenience wrapper around [`StatisticsAggregator::compute`].
pub fn compute_statistics<Tz: TimeZone>(
    decisions: &[Decision],
    now: &DateTime<Tz>,
) -> DecisionStatistics {
    StatisticsAggregator::compute(decisions, now)
}

#[cfg(test)]
#[path = "aggregator_test.rs"]
mod aggregator_test;
