//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DecisionRepository` - Decision aggregate persistence
//! - `Clock` - Local wall-clock time

mod clock;
mod decision_repository;

pub use clock::Clock;
pub use decision_repository::DecisionRepository;
