//! Plain-text decision report with a fixed-width scoring matrix.
//!
//! Timestamps are printed in UTC.

use crate::domain::decision::Decision;

/// Width of the option-name column; longer names are truncated.
pub const NAME_COLUMN_WIDTH: usize = 20;

/// Width of each criterion column; longer names are truncated.
pub const CRITERION_COLUMN_WIDTH: usize = 8;

/// Width of the total column.
pub const TOTAL_COLUMN_WIDTH: usize = 12;

const BANNER: &str = "========================================";
const RULE: &str = "----------------------------------------";

/// Renders a decision as a text report.
///
/// Layout: banner, metadata, numbered options, bulleted criteria, the
/// scoring matrix (weighted value per cell, `-` when unscored, cached total
/// last) and, when a winner is available, a `WINNER:` trailer with the
/// score truncated to an integer.
pub fn export_text(decision: &Decision) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(BANNER.to_string());
    lines.push("DECISION MATRIX REPORT".to_string());
    lines.push(BANNER.to_string());
    lines.push(String::new());

    lines.push(format!("Decision: {}", decision.title()));
    if !decision.goal().is_empty() {
        lines.push(format!("Goal: {}", decision.goal()));
    }
    lines.push(format!("Method: {}", decision.method()));
    lines.push(format!("Created: {}", decision.created_at().display_utc()));
    lines.push(format!("Status: {}", decision.status()));
    lines.push(String::new());

    lines.push("OPTIONS".to_string());
    lines.push(RULE.to_string());
    for (index, option) in decision.options().iter().enumerate() {
        lines.push(format!("{}. {}", index + 1, option.name()));
    }
    lines.push(String::new());

    lines.push("CRITERIA".to_string());
    lines.push(RULE.to_string());
    for criterion in decision.criteria() {
        lines.push(format!("• {} (weight: {})", criterion.name(), criterion.weight()));
    }
    lines.push(String::new());

    lines.push("SCORING MATRIX".to_string());
    lines.push(RULE.to_string());
    lines.push(matrix_header(decision));
    for option in decision.options() {
        let mut row = pad(&truncate(option.name(), NAME_COLUMN_WIDTH), NAME_COLUMN_WIDTH);
        for criterion in decision.criteria() {
            let cell = option
                .score_for(criterion.id())
                .map(|score| format!("{:.1}", score.value() * criterion.weight().as_f64()))
                .unwrap_or_else(|| "-".to_string());
            row.push_str(&pad(&cell, CRITERION_COLUMN_WIDTH));
        }
        row.push_str(&pad(&format!("{:.1}", option.total_score()), TOTAL_COLUMN_WIDTH));
        lines.push(row.trim_end().to_string());
    }

    if let Some(winner) = decision.winner() {
        lines.push(String::new());
        lines.push(BANNER.to_string());
        lines.push(format!(
            "WINNER: {} (Score: {})",
            winner.name(),
            winner.total_score().trunc() as i64
        ));
        lines.push(BANNER.to_string());
    }

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn matrix_header(decision: &Decision) -> String {
    let mut header = pad("Option", NAME_COLUMN_WIDTH);
    for criterion in decision.criteria() {
        header.push_str(&pad(
            &truncate(criterion.name(), CRITERION_COLUMN_WIDTH),
            CRITERION_COLUMN_WIDTH,
        ));
    }
    header.push_str(&pad("Total", TOTAL_COLUMN_WIDTH));
    header.trim_end().to_string()
}

/// Left-aligns `text` in a column of `width` characters. Never truncates.
fn pad(text: &str, width: usize) -> String {
    format!("{:<width$}", text, width = width)
}

/// First `width` characters of `text`.
fn truncate(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
