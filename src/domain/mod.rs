//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `decision` - Decision aggregate with its options, criteria and scores
//! - `validation` - Field and structural rules checked before mutation
//! - `scoring` - Weighted-sum totals, winner and ranking
//! - `statistics` - Cross-decision summary metrics
//! - `export` - Text report and CSV export of a single decision

pub mod decision;
pub mod export;
pub mod foundation;
pub mod scoring;
pub mod statistics;
pub mod validation;
