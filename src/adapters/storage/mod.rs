//! Storage Adapters
//!
//! File-backed implementation of the `DecisionRepository` port.
//!
//! ```ignore
//! use adapters::storage::FileDecisionRepository;
//!
//! let repo = FileDecisionRepository::new("./data/decisions");
//! ```

mod file_decision_repository;

pub use file_decision_repository::FileDecisionRepository;
