//! Demo invocation and output capture
//!
//! `CaseExecutor` separates subprocess invocation from suite orchestration,
//! allowing the orchestrator to be driven by a scripted executor in tests.
//! The default implementation shells out synchronously and captures both
//! output streams.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors that occur while launching a demo binary.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to launch {executable}: {source}")]
    Spawn {
        executable: String,
        #[source]
        source: std::io::Error,
    },
}

/// Captured outcome of one demo invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOutput {
    /// True when the process terminated with exit status zero
    pub passed: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Launch a demo binary and capture its outcome.
pub trait CaseExecutor {
    /// Run `executable` with `args`, blocking until it exits.
    ///
    /// A non-zero exit status is a `RunOutput` with `passed == false`, not an
    /// `Err`; an `Err` means the process could not be launched at all.
    fn execute(&self, executable: &Path, args: &[&str]) -> Result<RunOutput, ExecError>;
}

/// Synchronous `std::process::Command` execution (current behavior).
///
/// Runs the demo to completion with no timeout enforced by the harness: a
/// demo that never exits hangs the run.
pub struct ProcessExecutor;

impl CaseExecutor for ProcessExecutor {
    fn execute(&self, executable: &Path, args: &[&str]) -> Result<RunOutput, ExecError> {
        let output = Command::new(executable)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                executable: executable.display().to_string(),
                source,
            })?;

        Ok(RunOutput {
            passed: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_executable_is_a_spawn_error() {
        let result = ProcessExecutor.execute(Path::new("/nonexistent/demo_binary"), &[]);
        assert!(matches!(result, Err(ExecError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_zero_exit_passes_and_captures_stdout() {
        let output = ProcessExecutor
            .execute(Path::new("/bin/sh"), &["-c", "echo rendered 100 frames"])
            .unwrap();
        assert!(output.passed);
        assert!(output.stdout.contains("rendered 100 frames"));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit_fails_and_captures_stderr() {
        let output = ProcessExecutor
            .execute(Path::new("/bin/sh"), &["-c", "echo device lost >&2; exit 3"])
            .unwrap();
        assert!(!output.passed);
        assert!(output.stderr.contains("device lost"));
    }
}
