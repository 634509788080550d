//! Report output configuration

use serde::Deserialize;

/// What the report binary prints for each decision
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReportConfig {
    /// Also print the CSV export after the text report
    #[serde(default)]
    pub include_csv: bool,

    /// Skip decisions that are already completed
    #[serde(default)]
    pub active_only: bool,
}
