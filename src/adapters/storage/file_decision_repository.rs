//! File-based Decision Repository
//!
//! Stores each decision as `<decision-id>.yaml` under a base directory.
//! Options, criteria and scores live inside the decision's file, so removing
//! the file removes everything the decision owns.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, DomainError, ErrorCode};
use crate::ports::DecisionRepository;

const FILE_EXTENSION: &str = "yaml";

/// File-based storage for decisions
#[derive(Debug, Clone)]
pub struct FileDecisionRepository {
    base_path: PathBuf,
}

impl FileDecisionRepository {
    /// Create a new file repository rooted at `base_path`
    ///
    /// The directory is created on first save.
    ///
    /// # Example
    /// ```ignore
    /// let repo = FileDecisionRepository::new("./data/decisions");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn decision_file_path(&self, id: &DecisionId) -> PathBuf {
        self.base_path.join(format!("{}.{}", id, FILE_EXTENSION))
    }

    async fn read_decision(path: &Path) -> Result<Decision, DomainError> {
        let yaml = fs::read_to_string(path).await.map_err(io_error)?;
        serde_yaml::from_str(&yaml).map_err(|e| {
            DomainError::new(
                ErrorCode::SerializationError,
                format!("Failed to parse {}: {}", path.display(), e),
            )
        })
    }
}

fn io_error(err: std::io::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, err.to_string())
}

#[async_trait]
impl DecisionRepository for FileDecisionRepository {
    async fn save(&self, decision: &Decision) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path).await.map_err(io_error)?;

        let yaml = serde_yaml::to_string(decision)
            .map_err(|e| DomainError::new(ErrorCode::SerializationError, e.to_string()))?;

        let file_path = self.decision_file_path(decision.id());
        fs::write(&file_path, yaml).await.map_err(io_error)?;

        debug!(decision_id = %decision.id(), path = %file_path.display(), "Decision written");
        Ok(())
    }

    async fn find_by_id(&self, id: &DecisionId) -> Result<Option<Decision>, DomainError> {
        let file_path = self.decision_file_path(id);
        if !file_path.exists() {
            return Ok(None);
        }
        Self::read_decision(&file_path).await.map(Some)
    }

    async fn list_all(&self) -> Result<Vec<Decision>, DomainError> {
        if !self.base_path.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.base_path).await.map_err(io_error)?;
        let mut decisions = Vec::new();

        while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            match Self::read_decision(&path).await {
                Ok(decision) => decisions.push(decision),
                Err(err) => {
                    warn!(path = %path.display(), error = %err, "Skipping unreadable decision file");
                }
            }
        }

        decisions.sort_by_key(|d| *d.created_at());
        Ok(decisions)
    }

    async fn delete(&self, id: &DecisionId) -> Result<(), DomainError> {
        let file_path = self.decision_file_path(id);
        if !file_path.exists() {
            return Err(DomainError::new(
                ErrorCode::DecisionNotFound,
                format!("Decision not found: {}", id),
            ));
        }

        fs::remove_file(&file_path).await.map_err(io_error)?;
        debug!(decision_id = %id, "Decision file removed");
        Ok(())
    }
}
