//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod decision;

pub use decision::{
    AddCriterionCommand, AddCriterionHandler, AddCriterionResult, AddOptionCommand,
    AddOptionHandler, AddOptionResult, CompleteDecisionHandler, CompleteDecisionResult,
    CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult, DeleteDecisionCommand,
    DeleteDecisionHandler, ExportDecisionHandler, ExportDecisionQuery, ExportDecisionResult,
    ExportFormat, GetStatisticsHandler, RecordScoreCommand, RecordScoreHandler,
    RecordScoreResult, RemoveCriterionCommand, RemoveCriterionHandler, RemoveCriterionResult,
    RemoveOptionCommand, RemoveOptionHandler, RemoveOptionResult, Winner,
};
