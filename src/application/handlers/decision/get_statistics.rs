//! GetStatisticsHandler - Query handler for cross-decision statistics.

use std::sync::Arc;

use crate::domain::decision::DecisionError;
use crate::domain::statistics::{DecisionStatistics, StatisticsAggregator};
use crate::ports::{Clock, DecisionRepository};

/// Handler for computing statistics over every stored decision.
pub struct GetStatisticsHandler {
    repository: Arc<dyn DecisionRepository>,
    clock: Arc<dyn Clock>,
}

impl GetStatisticsHandler {
    pub fn new(repository: Arc<dyn DecisionRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    pub async fn handle(&self) -> Result<DecisionStatistics, DecisionError> {
        let decisions = self.repository.list_all().await?;
        Ok(StatisticsAggregator::compute(&decisions, &self.clock.now()))
    }
}
