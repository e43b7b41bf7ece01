//! Result table rendering
//!
//! Renders the ordered results as a fixed-width table. Rendering is separated
//! from emission; the suite driver decides where the lines go.

use super::CaseResult;

const RULE_WIDTH: usize = 60;
const NAME_WIDTH: usize = 35;
const STATUS_WIDTH: usize = 8;
const TIME_WIDTH: usize = 8;

/// Render the results as table lines, one row per result in input order.
///
/// Columns are left-justified and padded (never truncated): names to 35
/// characters, status and time to 8. Status text is the literal `PASS` or
/// `FAIL`.
pub fn format_table(results: &[CaseResult]) -> Vec<String> {
    let rule = "-".repeat(RULE_WIDTH);
    let mut lines = Vec::with_capacity(results.len() + 4);

    lines.push(rule.clone());
    lines.push(format!(
        "{:<NAME_WIDTH$} | {:<STATUS_WIDTH$} | {:<TIME_WIDTH$}",
        "Executable", "Status", "Time"
    ));
    lines.push(rule.clone());

    for result in results {
        let status = if result.passed { "PASS" } else { "FAIL" };
        lines.push(format!(
            "{:<NAME_WIDTH$} | {:<STATUS_WIDTH$} | {:<TIME_WIDTH$}",
            result.name, status, result.reported_time
        ));
    }

    lines.push(rule);
    lines
}
