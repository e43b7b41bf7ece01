//! Suite orchestration
//!
//! Drives the catalog through the execute → scrape-timing pipeline one entry
//! at a time and emits the final table. Per-demo faults (spawn failure,
//! non-zero exit, unusable log) are contained into that demo's row; only a
//! missing install directory aborts before anything runs.
//!
//! ## Modules
//!
//! - `exec` - Demo invocation and output capture
//! - `timing` - Log-file timing extraction
//! - `report` - Result table rendering

pub mod exec;
pub mod report;
pub mod timing;

use std::path::Path;

use tracing::{error, info};

use crate::catalog::TestCase;
use crate::cli::{CliError, CliResult, ExitCode};

use exec::CaseExecutor;

/// Outcome of one demo run.
///
/// Exactly one of these exists per catalog entry, in catalog order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseResult {
    /// Executable name from the catalog
    pub name: String,
    /// True when the demo exited with status zero
    pub passed: bool,
    /// Timing string scraped from the demo's log file, or `"N/A"`
    pub reported_time: String,
}

/// Run the whole suite and report.
///
/// Checks the install directory up front, executes every catalog entry in
/// order, emits the table at info level, and maps the aggregate outcome to an
/// exit code. Failures are already visible through the log sink, so the
/// returned error carries no message of its own.
pub fn run_suite(
    catalog: &[TestCase],
    executor: &dyn CaseExecutor,
    install_dir: &Path,
) -> CliResult<ExitCode> {
    if !install_dir.exists() {
        error!("Test directory '{}' not found", install_dir.display());
        return Err(CliError::new("", ExitCode::FAILURE));
    }

    let results = run_cases(catalog, executor, install_dir);

    info!("Test Results:");
    for line in report::format_table(&results) {
        info!("{}", line);
    }

    if results.iter().all(|r| r.passed) {
        Ok(ExitCode::SUCCESS)
    } else {
        Err(CliError::new("", ExitCode::FAILURE))
    }
}

/// Execute every catalog entry in order and collect one result per entry.
///
/// A failing demo never stops the run; the remaining entries still execute.
pub fn run_cases(
    catalog: &[TestCase],
    executor: &dyn CaseExecutor,
    install_dir: &Path,
) -> Vec<CaseResult> {
    let mut results = Vec::with_capacity(catalog.len());

    for case in catalog {
        info!("Testing: {}", case.name);
        let executable = install_dir.join(case.name);

        info!("Running: {}", executable.display());
        let passed = match executor.execute(&executable, case.args) {
            Ok(output) => {
                if output.passed {
                    info!("Output: {}", output.stdout);
                } else {
                    error!("Failed: {}", output.stderr);
                }
                output.passed
            }
            Err(e) => {
                error!("Failed: {}", e);
                false
            }
        };

        let log_file = install_dir.join(timing::log_file_name(case.name));
        let reported_time = timing::reported_time(&log_file);

        results.push(CaseResult {
            name: case.name.to_string(),
            passed,
            reported_time,
        });
    }

    results
}
