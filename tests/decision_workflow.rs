//! End-to-end decision workflow through the application handlers, backed by
//! the YAML file repository.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tempfile::TempDir;

use decision_matrix::adapters::{FileDecisionRepository, FixedClock, InMemoryDecisionRepository};
use decision_matrix::application::{
    AddCriterionCommand, AddCriterionHandler, AddOptionCommand, AddOptionHandler,
    CompleteDecisionHandler, CreateDecisionCommand, CreateDecisionHandler, DeleteDecisionCommand,
    DeleteDecisionHandler, ExportDecisionHandler, ExportDecisionQuery, ExportFormat,
    GetStatisticsHandler, RecordScoreCommand, RecordScoreHandler, RemoveCriterionCommand,
    RemoveCriterionHandler,
};
use decision_matrix::domain::decision::{Decision, DecisionError};
use decision_matrix::domain::export::parse_score_rows;
use decision_matrix::domain::foundation::ScoringMethod;
use decision_matrix::ports::DecisionRepository;

struct Handlers {
    create: CreateDecisionHandler,
    add_option: AddOptionHandler,
    add_criterion: AddCriterionHandler,
    record: RecordScoreHandler,
    remove_criterion: RemoveCriterionHandler,
    complete: CompleteDecisionHandler,
    export: ExportDecisionHandler,
    delete: DeleteDecisionHandler,
}

impl Handlers {
    fn new(repo: Arc<dyn DecisionRepository>) -> Self {
        Self {
            create: CreateDecisionHandler::new(repo.clone()),
            add_option: AddOptionHandler::new(repo.clone()),
            add_criterion: AddCriterionHandler::new(repo.clone()),
            record: RecordScoreHandler::new(repo.clone()),
            remove_criterion: RemoveCriterionHandler::new(repo.clone()),
            complete: CompleteDecisionHandler::new(repo.clone()),
            export: ExportDecisionHandler::new(repo.clone()),
            delete: DeleteDecisionHandler::new(repo),
        }
    }

    async fn build_car_decision(&self) -> Decision {
        let mut decision = self
            .create
            .handle(CreateDecisionCommand {
                title: "Pick a car".to_string(),
                goal: "Reliable commute".to_string(),
            })
            .await
            .unwrap()
            .decision;

        let a = self
            .add_option
            .handle(&mut decision, AddOptionCommand { name: "AA".to_string() })
            .await
            .unwrap()
            .option_id;
        let b = self
            .add_option
            .handle(&mut decision, AddOptionCommand { name: "BB".to_string() })
            .await
            .unwrap()
            .option_id;
        let price = self
            .add_criterion
            .handle(
                &mut decision,
                AddCriterionCommand {
                    name: "Price".to_string(),
                    weight: 10,
                },
            )
            .await
            .unwrap()
            .criterion_id;

        for (option_id, value) in [(a, 8.0), (b, 3.0)] {
            self.record
                .handle(
                    &mut decision,
                    RecordScoreCommand {
                        option_id,
                        criterion_id: price,
                        value,
                    },
                )
                .await
                .unwrap();
        }
        decision
    }
}

#[tokio::test]
async fn full_workflow_persists_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let repo: Arc<dyn DecisionRepository> = Arc::new(FileDecisionRepository::new(temp_dir.path()));
    let handlers = Handlers::new(repo.clone());

    let mut decision = handlers.build_car_decision().await;
    let result = handlers.complete.handle(&mut decision).await.unwrap();

    assert_eq!(result.winner.name, "AA");
    assert_eq!(result.winner.total_score, 80.0);

    let reloaded = FileDecisionRepository::new(temp_dir.path())
        .find_by_id(decision.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded, decision);
    assert!(reloaded.is_completed());

    let text = handlers
        .export
        .handle(ExportDecisionQuery {
            decision_id: *decision.id(),
            format: ExportFormat::Text,
        })
        .await
        .unwrap()
        .content;
    assert!(text.contains("80.0"));
    assert!(text.contains("WINNER: AA (Score: 80)"));

    let table = handlers
        .export
        .handle(ExportDecisionQuery {
            decision_id: *decision.id(),
            format: ExportFormat::Table,
        })
        .await
        .unwrap()
        .content;
    let rows = parse_score_rows(&table).unwrap();
    let pairs: Vec<(f64, u8)> = rows.iter().map(|r| (r.score, r.weight)).collect();
    assert_eq!(pairs, vec![(8.0, 10), (3.0, 10)]);
}

#[tokio::test]
async fn removing_the_only_criterion_blocks_completion() {
    let repo: Arc<dyn DecisionRepository> = Arc::new(InMemoryDecisionRepository::new());
    let handlers = Handlers::new(repo.clone());
    let mut decision = handlers.build_car_decision().await;
    let price = *decision.criteria()[0].id();

    let removed = handlers
        .remove_criterion
        .handle(&mut decision, RemoveCriterionCommand { criterion_id: price })
        .await
        .unwrap();

    assert_eq!(removed.removed_scores, 2);
    assert!(decision.options().iter().all(|o| o.total_score() == 0.0));
    let err = handlers.complete.handle(&mut decision).await.unwrap_err();
    assert!(matches!(err, DecisionError::InvalidFlow(_)));
    assert_eq!(repo.find_by_id(decision.id()).await.unwrap(), Some(decision));
}

#[tokio::test]
async fn statistics_and_cascading_delete() {
    let temp_dir = TempDir::new().unwrap();
    let repo: Arc<dyn DecisionRepository> = Arc::new(FileDecisionRepository::new(temp_dir.path()));
    let handlers = Handlers::new(repo.clone());

    let mut first = handlers.build_car_decision().await;
    handlers.complete.handle(&mut first).await.unwrap();
    let second = handlers.build_car_decision().await;

    let now: DateTime<Utc> = Utc::now() + Duration::minutes(1);
    let stats_handler = GetStatisticsHandler::new(repo.clone(), Arc::new(FixedClock::new(now.fixed_offset())));
    let stats = stats_handler.handle().await.unwrap();

    assert_eq!(stats.total_decisions, 2);
    assert_eq!(stats.completed_decisions, 1);
    assert_eq!(stats.active_decisions, 1);
    assert_eq!(stats.total_options, 4);
    assert_eq!(stats.total_criteria, 2);
    assert_eq!(stats.average_options_per_decision, 2.0);
    assert_eq!(stats.most_used_method, Some(ScoringMethod::Matrix));

    handlers
        .delete
        .handle(DeleteDecisionCommand {
            decision_id: *second.id(),
        })
        .await
        .unwrap();

    assert!(repo.find_by_id(second.id()).await.unwrap().is_none());
    let stats = stats_handler.handle().await.unwrap();
    assert_eq!(stats.total_decisions, 1);
    assert_eq!(stats.total_options, 2);

    let err = handlers
        .delete
        .handle(DeleteDecisionCommand {
            decision_id: *second.id(),
        })
        .await
        .unwrap_err();
    assert_eq!(err, DecisionError::NotFound(*second.id()));
}
