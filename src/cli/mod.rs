//! CLI module for the raysmoke harness
//!
//! This module provides the command-line interface for the smoke suite.
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! The suite driver returns `CliResult<ExitCode>` instead of calling
//! `process::exit`. Only the top-level `run()` function handles errors and
//! exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fmt;
use std::path::Path;
use std::process;

use clap::Parser;

use crate::catalog;
use crate::harness;
use crate::harness::exec::ProcessExecutor;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
/// An empty message means the failure was already reported through the log
/// sink and only the exit code remains to be propagated.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Smoke-test harness for the ray tracing tutorial demos
#[derive(Parser, Debug)]
#[command(name = "raysmoke")]
#[command(version = VERSION)]
#[command(about = "Run the ray tracing demo smoke suite", long_about = None)]
pub struct Cli {
    /// Run all tests (accepted for compatibility; the full suite always runs)
    #[arg(long)]
    pub test: bool,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. The suite driver
/// returns `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI invocation and return the suite result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    // `--test` is accepted for compatibility with older wrapper scripts but
    // does not select anything; the full suite is the only mode.
    let _ = cli.test;

    harness::run_suite(
        catalog::CATALOG,
        &ProcessExecutor,
        Path::new(catalog::INSTALL_DIR),
    )
}

// ============================================================================
// Tests
// ============================================================================
