#![forbid(unsafe_code)]
//! Smoke-test harness for the Vulkan ray tracing tutorial demos
//!
//! The harness runs every demo binary from a fixed catalog in order, each in
//! headless mode, captures its exit status and output, scrapes the demo's
//! self-reported timing line from its companion log file, and renders a
//! PASS/FAIL table. The process exits non-zero when any demo fails or the
//! install directory is missing.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! Every fault a single demo can produce (spawn failure, non-zero exit,
//! missing or malformed log) is contained into its row of the report; only a
//! missing install directory aborts the run.

pub mod catalog;
pub mod cli;
pub mod harness;

pub use catalog::{CATALOG, INSTALL_DIR, TestCase};
pub use harness::exec::{CaseExecutor, ExecError, ProcessExecutor, RunOutput};
pub use harness::{CaseResult, run_cases, run_suite};
