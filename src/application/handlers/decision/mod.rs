//! Decision command and query handlers.
//!
//! Command handlers take the caller's working copy of a decision, apply one
//! validated change, recompute totals and save. If the save fails they undo
//! the change so the working copy matches what is persisted.

mod add_criterion;
mod add_option;
mod complete_decision;
mod create_decision;
mod delete_decision;
mod export_decision;
mod get_statistics;
mod record_score;
mod remove_criterion;
mod remove_option;

#[cfg(test)]
pub(crate) mod test_support;

pub use add_criterion::{AddCriterionCommand, AddCriterionHandler, AddCriterionResult};
pub use add_option::{AddOptionCommand, AddOptionHandler, AddOptionResult};
pub use complete_decision::{CompleteDecisionHandler, CompleteDecisionResult, Winner};
pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use export_decision::{
    ExportDecisionHandler, ExportDecisionQuery, ExportDecisionResult, ExportFormat,
};
pub use get_statistics::GetStatisticsHandler;
pub use record_score::{RecordScoreCommand, RecordScoreHandler, RecordScoreResult};
pub use remove_criterion::{RemoveCriterionCommand, RemoveCriterionHandler, RemoveCriterionResult};
pub use remove_option::{RemoveOptionCommand, RemoveOptionHandler, RemoveOptionResult};
