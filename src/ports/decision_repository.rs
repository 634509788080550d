//! Decision repository port.
//!
//! Defines the contract for persisting and retrieving Decision aggregates.
//! A decision is stored as a whole: its options, criteria and scores travel
//! with it, so deleting a decision deletes everything it owns.

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError};
use async_trait::async_trait;

/// Repository port for Decision aggregate persistence.
#[async_trait]
pub trait DecisionRepository: Send + Sync {
    /// Insert or replace a decision.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, decision: &Decision) -> Result<(), DomainError>;

    /// Find a decision by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError>;

    /// List every stored decision, oldest first.
    async fn list_all(&self) -> Result<Vec<Decision>, DomainError>;

    /// Delete a decision together with its options, criteria and scores.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError>;
}
