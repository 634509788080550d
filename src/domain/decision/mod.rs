//! Decision domain module.
//!
//! The entity model: a `Decision` owns ordered `DecisionOption`s and
//! `Criterion`s, and each option owns the `Score`s that rate it against the
//! decision's criteria (a sparse option x criterion matrix).

mod aggregate;
mod criterion;
mod errors;
mod option;
mod score;

pub use aggregate::{Decision, RemovedCriterion, RemovedOption};
pub use criterion::Criterion;
pub use errors::DecisionError;
pub use option::DecisionOption;
pub use score::Score;
