//! Process invocation.
//!
//! Runs `<tool> <filename>` once, blocking until it exits, and keeps the
//! raw bytes it wrote to stdout and stderr.

use crate::error::{Error, Result};
use crate::tool::resolve::ResolvedTool;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Exit code reported when no better code can be derived.
const GENERIC_FAILURE: i32 = 1;

/// Offset added to a signal number, as shells do.
#[cfg(unix)]
const SIGNAL_EXIT_BASE: i32 = 128;

/// Record of a single completed tool run.
#[derive(Debug, Clone)]
pub struct Invocation {
    /// Program that was launched.
    pub program: PathBuf,
    /// File handed to the program.
    pub filename: PathBuf,
    /// Everything written to stdout.
    pub stdout: Vec<u8>,
    /// Everything written to stderr.
    pub stderr: Vec<u8>,
    /// Exit status of the program.
    pub status: ExitStatus,
}

/// What the wrapper should relay for a finished run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Tool exited with code zero.
    Success {
        /// Captured standard output.
        stdout: Vec<u8>,
    },
    /// Tool exited non-zero or was killed.
    Failure {
        /// Exit code to terminate with.
        code: i32,
        /// Captured standard error.
        stderr: Vec<u8>,
    },
}

impl Outcome {
    /// Exit code the wrapper should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Success { .. } => 0,
            Self::Failure { code, .. } => *code,
        }
    }
}

impl Invocation {
    /// Exit code of the run, deriving one for signal deaths.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        exit_code_of(self.status)
    }

    /// Consumes the record and decides what to relay.
    #[must_use]
    pub fn outcome(self) -> Outcome {
        let code = self.exit_code();
        if code == 0 {
            Outcome::Success {
                stdout: self.stdout,
            }
        } else {
            Outcome::Failure {
                code,
                stderr: self.stderr,
            }
        }
    }
}

/// Runs the tool against `filename` and waits for it.
///
/// # Errors
///
/// Returns [`Error::Launch`] if the program cannot be started. A program
/// that starts and then fails is reported through its [`Invocation`].
pub fn invoke(tool: &ResolvedTool, filename: &Path) -> Result<Invocation> {
    tracing::debug!(
        program = %tool.program.display(),
        filename = %filename.display(),
        "running tool"
    );

    let output = Command::new(&tool.program)
        .arg(filename)
        .stdin(Stdio::null())
        .output()
        .map_err(|source| Error::Launch {
            program: tool.program.clone(),
            source,
        })?;

    tracing::debug!(
        status = %output.status,
        stdout_bytes = output.stdout.len(),
        stderr_bytes = output.stderr.len(),
        "tool finished"
    );

    Ok(Invocation {
        program: tool.program.clone(),
        filename: filename.to_path_buf(),
        stdout: output.stdout,
        stderr: output.stderr,
        status: output.status,
    })
}

fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return SIGNAL_EXIT_BASE + signal;
        }
    }

    GENERIC_FAILURE
}
