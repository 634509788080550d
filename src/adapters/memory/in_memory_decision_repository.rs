//! In-Memory Decision Repository
//!
//! Stores decisions in a map guarded by a tokio `RwLock`.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::ports::DecisionRepository;

/// In-memory storage for decisions
#[derive(Debug, Clone)]
pub struct InMemoryDecisionRepository {
    decisions: Arc<RwLock<HashMap<DecisionId, Decision>>>,
}

impl InMemoryDecisionRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            decisions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.decisions.write().await.clear();
    }

    /// Get the number of stored decisions
    pub async fn len(&self) -> usize {
        self.decisions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.decisions.read().await.is_empty()
    }
}

impl Default for InMemoryDecisionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DecisionRepository for InMemoryDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        let mut decisions = self.decisions.write().await;
        decisions.insert(*decision.id(), decision.clone());
        debug!(decision_id = %decision.id(), "Decision stored in memory");
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError> {
        let decisions = self.decisions.read().await;
        Ok(decisions.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Decision>, DomainError> {
        let decisions = self.decisions.read().await;
        let mut all: Vec<Decision> = decisions.values().cloned().collect();
        all.sort_by_key(|d| *d.created_at());
        Ok(all)
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        let mut decisions = self.decisions.write().await;
        decisions.remove(id).map(|_| ()).ok_or_else(|| {
            DomainError::new(ErrorCode::DecisionNotFound, format!("Decision not found: {}", id))
        })
    }
}
