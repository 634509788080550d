//! Statistics Module - read-only summaries across many decisions.

mod aggregator;

pub use aggregator::{compute_statistics, DecisionStatistics, StatisticsAggregator, RECENT_WINDOW_DAYS};
