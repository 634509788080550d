//! Mock ports shared by the decision handler tests.

use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::ports::{Clock, DecisionRepository};

pub struct MockDecisionRepository {
    decisions: Mutex<HashMap<DecisionId, Decision>>,
    save_calls: Mutex<usize>,
    fail_save: bool,
}

impl MockDecisionRepository {
    pub fn new() -> Self {
        Self {
            decisions: Mutex::new(HashMap::new()),
            save_calls: Mutex::new(0),
            fail_save: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_save: true,
            ..Self::new()
        }
    }

    pub fn with_decision(decision: Decision) -> Self {
        let repo = Self::new();
        repo.decisions
            .lock()
            .unwrap()
            .insert(*decision.id(), decision);
        repo
    }

    pub fn stored(&self, id: &DecisionId) -> Option<Decision> {
        self.decisions.lock().unwrap().get(id).cloned()
    }

    pub fn save_calls(&self) -> usize {
        *self.save_calls.lock().unwrap()
    }
}

#[async_trait]
impl DecisionRepository for MockDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        *self.save_calls.lock().unwrap() += 1;
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated save failure",
            ));
        }
        self.decisions
            .lock()
            .unwrap()
            .insert(*decision.id(), decision.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError> {
        Ok(self.stored(id))
    }

    async fn list_all(&self) -> Result<Vec<Decision>, DomainError> {
        let mut all: Vec<Decision> = self.decisions.lock().unwrap().values().cloned().collect();
        all.sort_by_key(|d| *d.created_at());
        Ok(all)
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        if self.fail_save {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated delete failure",
            ));
        }
        self.decisions
            .lock()
            .unwrap()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| DomainError::new(ErrorCode::DecisionNotFound, "Decision not found"))
    }
}

pub struct MockClock(pub DateTime<FixedOffset>);

impl MockClock {
    pub fn at(rfc3339: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(rfc3339).unwrap())
    }
}

impl Clock for MockClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Two options, one criterion (weight 10), nothing scored.
pub fn two_by_one() -> Decision {
    let mut decision = Decision::new("Pick a car", "Reliable commute");
    decision.add_option("A");
    decision.add_option("B");
    decision.add_criterion("Price", 10);
    decision
}
