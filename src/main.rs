//! `decision-matrix` report binary.
//!
//! Loads configuration from the environment, opens the decision store and
//! prints cross-decision statistics followed by a report for every stored
//! decision.

use std::error::Error;
use std::sync::Arc;

use tracing::{info, warn};

use decision_matrix::adapters::{FileDecisionRepository, SystemClock};
use decision_matrix::application::{
    ExportDecisionHandler, ExportDecisionQuery, ExportFormat, GetStatisticsHandler,
};
use decision_matrix::config::{AppConfig, LogConfig};
use decision_matrix::domain::statistics::DecisionStatistics;
use decision_matrix::ports::DecisionRepository;

fn init_tracing(config: &LogConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_statistics(stats: &DecisionStatistics) {
    println!("Decisions:          {}", stats.total_decisions);
    println!("  completed:        {}", stats.completed_decisions);
    println!("  active:           {}", stats.active_decisions);
    println!("  last 7 days:      {}", stats.recent_decisions);
    println!(
        "Options / decision: {:.1}",
        stats.average_options_per_decision
    );
    println!(
        "Criteria / decision: {:.1}",
        stats.average_criteria_per_decision
    );
    if let Some(method) = stats.most_used_method {
        println!("Most used method:   {}", method);
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.log);

    let repository: Arc<dyn DecisionRepository> =
        Arc::new(FileDecisionRepository::new(config.storage.data_dir()));
    info!(data_dir = %config.storage.data_dir().display(), "Opened decision store");

    let stats = GetStatisticsHandler::new(repository.clone(), Arc::new(SystemClock))
        .handle()
        .await?;
    print_statistics(&stats);

    let exporter = ExportDecisionHandler::new(repository.clone());
    for decision in repository.list_all().await? {
        if config.report.active_only && decision.is_completed() {
            continue;
        }

        let mut formats = vec![ExportFormat::Text];
        if config.report.include_csv {
            formats.push(ExportFormat::Table);
        }

        for format in formats {
            let query = ExportDecisionQuery {
                decision_id: *decision.id(),
                format,
            };
            match exporter.handle(query).await {
                Ok(export) => println!("\n{}", export.content),
                Err(err) => warn!(decision_id = %decision.id(), error = %err, "Export failed"),
            }
        }
    }

    Ok(())
}
