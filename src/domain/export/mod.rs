//! Export Module - human-readable and tabular renderings of one decision.
//!
//! Both formats are pure functions of a `Decision`. Totals are read from
//! the options' cached values, so recompute them before exporting.

mod table_export;
mod text_report;

pub use table_export::{export_table, parse_score_rows, ExportError, ScoreRow, SCORES_HEADER};
pub use text_report::{
    export_text, CRITERION_COLUMN_WIDTH, NAME_COLUMN_WIDTH, TOTAL_COLUMN_WIDTH,
};

/// Formats a number so that whole values keep one decimal (`80.0`) and
/// fractional values keep their shortest exact form (`7.25`).
pub(crate) fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}
