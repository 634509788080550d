//! Scoring Module - weighted-sum evaluation of a decision's options.
//!
//! # Components
//!
//! - `ScoringEngine` - batch recomputation of cached totals, winner, ranking
//!
//! All functions are pure over their inputs apart from `recompute_totals`,
//! which overwrites the cached total on each option.

mod engine;

pub use engine::{RankedOption, ScoringEngine, ScoringProgress};
