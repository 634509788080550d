//! CSV export of a decision and parsing of its Scores section.
//!
//! The `Created` record is written in UTC.

use thiserror::Error;

use super::format_number;
use crate::domain::decision::Decision;

/// Header row that opens the Scores section.
pub const SCORES_HEADER: [&str; 5] = ["Option", "Criterion", "Score", "Weight", "Weighted"];

/// Errors from writing or reading the tabular export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Malformed export: {0}")]
    Malformed(String),
}

/// One flattened (option, criterion) cell from the Scores section.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub option: String,
    pub criterion: String,
    pub score: f64,
    pub weight: u8,
    pub weighted: f64,
}

/// Renders a decision as CSV.
///
/// Sections, separated by a blank line:
/// 1. `Decision`, `Goal`, `Method`, `Created`, `Status` key/value records
/// 2. `Options` with `Name,Total Score` rows
/// 3. `Criteria` with `Name,Weight` rows
/// 4. `Scores` with one `Option,Criterion,Score,Weight,Weighted` row per
///    recorded score; unscored pairs are omitted
///
/// Fields are quoted by the CSV writer only when they need it.
pub fn export_table(decision: &Decision) -> Result<String, ExportError> {
    let metadata = vec![
        vec!["Decision".to_string(), decision.title().to_string()],
        vec!["Goal".to_string(), decision.goal().to_string()],
        vec!["Method".to_string(), decision.method().to_string()],
        vec!["Created".to_string(), decision.created_at().display_utc()],
        vec!["Status".to_string(), decision.status().to_string()],
    ];

    let mut options = vec![
        vec!["Options".to_string()],
        vec!["Name".to_string(), "Total Score".to_string()],
    ];
    for option in decision.options() {
        options.push(vec![
            option.name().to_string(),
            format_number(option.total_score()),
        ]);
    }

    let mut criteria = vec![
        vec!["Criteria".to_string()],
        vec!["Name".to_string(), "Weight".to_string()],
    ];
    for criterion in decision.criteria() {
        criteria.push(vec![
            criterion.name().to_string(),
            criterion.weight().to_string(),
        ]);
    }

    let mut scores = vec![
        vec!["Scores".to_string()],
        SCORES_HEADER.iter().map(|h| h.to_string()).collect(),
    ];
    for option in decision.options() {
        for criterion in decision.criteria() {
            if let Some(score) = option.score_for(criterion.id()) {
                let weight = criterion.weight();
                scores.push(vec![
                    option.name().to_string(),
                    criterion.name().to_string(),
                    format_number(score.value()),
                    weight.to_string(),
                    format_number(score.value() * weight.as_f64()),
                ]);
            }
        }
    }

    let sections = [metadata, options, criteria, scores]
        .iter()
        .map(|records| write_section(records))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(sections.join("\n"))
}

fn write_section(records: &[Vec<String>]) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());
    for record in records {
        writer.write_record(record)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}

/// Reads the Scores section of a table produced by [`export_table`].
///
/// # Errors
///
/// - `Malformed` if the Scores header is missing or a row has the wrong
///   shape or an unparsable number
pub fn parse_score_rows(table: &str) -> Result<Vec<ScoreRow>, ExportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(table.as_bytes());

    let mut in_scores = false;
    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record?;
        if !in_scores {
            in_scores = record.iter().eq(SCORES_HEADER.iter().copied());
            continue;
        }
        if record.len() != SCORES_HEADER.len() {
            return Err(ExportError::Malformed(format!(
                "score row has {} fields, expected {}",
                record.len(),
                SCORES_HEADER.len()
            )));
        }
        rows.push(ScoreRow {
            option: record[0].to_string(),
            criterion: record[1].to_string(),
            score: parse_field(&record[2], "Score")?,
            weight: parse_field(&record[3], "Weight")?,
            weighted: parse_field(&record[4], "Weighted")?,
        });
    }

    if !in_scores {
        return Err(ExportError::Malformed("missing Scores section".to_string()));
    }
    Ok(rows)
}

fn parse_field<T: std::str::FromStr>(raw: &str, column: &str) -> Result<T, ExportError> {
    raw.trim()
        .parse()
        .map_err(|_| ExportError::Malformed(format!("invalid {} value '{}'", column, raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::ScoringEngine;
    use crate::domain::validation::{validate_criteria_name, validate_option_name};

    fn pick_a_car() -> Decision {
        let mut decision = Decision::new("Pick a car", "Reliable commute");
        let a = decision.add_option("A");
        let b = decision.add_option("B");
        let price = decision.add_criterion("Price", 10);
        decision.record_score(&a, &price, 8.0).unwrap();
        decision.record_score(&b, &price, 3.0).unwrap();
        ScoringEngine::recompute_totals(&mut decision);
        decision
    }

    #[test]
    fn table_has_all_sections_in_order() {
        let table = export_table(&pick_a_car()).unwrap();

        assert!(table.starts_with("Decision,Pick a car\nGoal,Reliable commute\nMethod,Matrix\n"));
        assert!(table.contains("Status,In Progress\n"));
        let created = table.lines().find(|l| l.starts_with("Created,")).unwrap();
        assert!(created.ends_with(" UTC"));
        assert!(table.contains("\nOptions\nName,Total Score\nA,80.0\nB,30.0\n"));
        assert!(table.contains("\nCriteria\nName,Weight\nPrice,10\n"));
        assert!(table.ends_with(
            "\nScores\nOption,Criterion,Score,Weight,Weighted\nA,Price,8.0,10,80.0\nB,Price,3.0,10,30.0\n"
        ));
    }

    #[test]
    fn unscored_pairs_are_omitted() {
        let mut decision = Decision::new("Sparse", "");
        let a = decision.add_option("Alpha");
        decision.add_option("Beta");
        let price = decision.add_criterion("Price", 2);
        decision.add_criterion("Comfort", 4);
        decision.record_score(&a, &price, 6.5).unwrap();

        let rows = parse_score_rows(&export_table(&decision).unwrap()).unwrap();

        assert_eq!(
            rows,
            vec![ScoreRow {
                option: "Alpha".to_string(),
                criterion: "Price".to_string(),
                score: 6.5,
                weight: 2,
                weighted: 13.0,
            }]
        );
    }

    #[test]
    fn scores_round_trip_to_the_inputs_of_the_totals() {
        let mut decision = Decision::new("Round trip", "");
        let alpha = decision.add_option("Alpha");
        let beta = decision.add_option("Beta");
        let price = decision.add_criterion("Price", 7);
        let comfort = decision.add_criterion("Comfort", 3);
        decision.record_score(&alpha, &price, 7.25).unwrap();
        decision.record_score(&alpha, &comfort, 1.1).unwrap();
        decision.record_score(&beta, &price, 9.999).unwrap();
        decision.record_score(&beta, &comfort, 4.0).unwrap();
        ScoringEngine::recompute_totals(&mut decision);

        let rows = parse_score_rows(&export_table(&decision).unwrap()).unwrap();
        assert_eq!(rows.len(), 4);

        for option in decision.options() {
            let total: f64 = rows
                .iter()
                .filter(|r| r.option == option.name())
                .map(|r| r.score * f64::from(r.weight))
                .sum();
            assert!((total - option.total_score()).abs() < 1e-9);
        }
        for row in &rows {
            let criterion = decision
                .criteria()
                .iter()
                .find(|c| c.name() == row.criterion)
                .unwrap();
            let option = decision.options().iter().find(|o| o.name() == row.option).unwrap();
            assert_eq!(row.weight, criterion.weight().value());
            assert_eq!(row.score, option.score_for(criterion.id()).unwrap().value());
        }
    }

    #[test]
    fn names_at_validated_bounds_survive_export() {
        let shortest = "ab".to_string();
        let longest = "n".repeat(100);
        let punctuated = format!("{}, \"quoted\"", "x".repeat(80));
        for name in [&shortest, &longest, &punctuated] {
            assert!(validate_option_name(name, [""; 0]).is_ok());
            assert!(validate_criteria_name(name, [""; 0]).is_ok());
        }

        let mut decision = Decision::new("Bounds", "");
        let o1 = decision.add_option(shortest.clone());
        let o2 = decision.add_option(punctuated.clone());
        let c1 = decision.add_criterion(longest.clone(), 10);
        decision.record_score(&o1, &c1, 10.0).unwrap();
        decision.record_score(&o2, &c1, 1.0).unwrap();

        let rows = parse_score_rows(&export_table(&decision).unwrap()).unwrap();

        assert_eq!(rows[0].option, shortest);
        assert_eq!(rows[0].criterion, longest);
        assert_eq!(rows[1].option, punctuated);
        assert_eq!(rows[1].weighted, 10.0);
    }

    #[test]
    fn decision_without_options_has_empty_sections() {
        let table = export_table(&Decision::new("Empty", "")).unwrap();
        assert!(table.contains("Goal,\n"));
        assert!(table.ends_with("Scores\nOption,Criterion,Score,Weight,Weighted\n"));
        assert!(parse_score_rows(&table).unwrap().is_empty());
    }

    #[test]
    fn parse_rejects_missing_scores_section() {
        let err = parse_score_rows("Decision,Only metadata\n").unwrap_err();
        assert!(matches!(err, ExportError::Malformed(_)));
    }

    #[test]
    fn parse_rejects_bad_numbers() {
        let table = "Option,Criterion,Score,Weight,Weighted\nA,Price,eight,10,80.0\n";
        let err = parse_score_rows(table).unwrap_err();
        assert_eq!(err.to_string(), "Malformed export: invalid Score value 'eight'");
    }
}
