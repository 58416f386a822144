//! Relays a finished run to the caller's streams.

use crate::error::Result;
use crate::tool::Outcome;
use std::io::{self, Write};

/// Writes the outcome to the given streams and returns the exit status to
/// terminate with.
///
/// Captured bytes are written unchanged. A closed output pipe (for example
/// `show_h5 data.h5 | head`) is not treated as an error.
///
/// # Errors
///
/// Returns an error if writing to either stream fails for any other reason.
pub fn relay<O: Write, E: Write>(outcome: &Outcome, stdout: &mut O, stderr: &mut E) -> Result<u8> {
    match outcome {
        Outcome::Success { stdout: bytes } => {
            write_all_tolerating_broken_pipe(stdout, bytes)?;
            Ok(0)
        }
        Outcome::Failure {
            code,
            stderr: bytes,
        } => {
            write_all_tolerating_broken_pipe(stderr, bytes)?;
            Ok(status_byte(*code))
        }
    }
}

/// Narrows an exit code to what a process can report.
///
/// Codes outside `0..=255` cannot be reproduced; they become 1 so that a
/// failure never reads as success.
#[must_use]
pub fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}

fn write_all_tolerating_broken_pipe<W: Write>(writer: &mut W, bytes: &[u8]) -> Result<()> {
    match writer.write_all(bytes).and_then(|()| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other.map_err(Into::into),
    }
}
