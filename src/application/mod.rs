//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate and persist; query handlers only read.

pub mod handlers;

pub use handlers::{
    AddCriterionCommand, AddCriterionHandler, AddCriterionResult, AddOptionCommand,
    AddOptionHandler, AddOptionResult, CompleteDecisionHandler, CompleteDecisionResult,
    CreateDecisionCommand, CreateDecisionHandler, CreateDecisionResult, DeleteDecisionCommand,
    DeleteDecisionHandler, ExportDecisionHandler, ExportDecisionQuery, ExportDecisionResult,
    ExportFormat, GetStatisticsHandler, RecordScoreCommand, RecordScoreHandler,
    RecordScoreResult, RemoveCriterionCommand, RemoveCriterionHandler, RemoveCriterionResult,
    RemoveOptionCommand, RemoveOptionHandler, RemoveOptionResult, Winner,
};
