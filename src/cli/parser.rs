//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable naming the dump tool when `--h5dump` is absent.
pub const TOOL_ENV: &str = "SHOW_H5_H5DUMP";

/// Print the structure and contents of an HDF5 file.
///
/// Runs `h5dump` on the file and relays its output. The exit code mirrors
/// the exit code of `h5dump`.
#[derive(Parser, Debug)]
#[command(name = "show_h5")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// HDF5 file to dump.
    pub filename: PathBuf,

    /// Path or name of the dump tool.
    ///
    /// Falls back to `SHOW_H5_H5DUMP` when set and non-empty, then to
    /// `h5dump` found on PATH.
    #[arg(long = "h5dump", value_name = "PATH")]
    pub h5dump: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Format for errors raised by show_h5 itself (text, json).
    #[arg(long, default_value = "text")]
    pub format: String,
}

impl Cli {
    /// Default log filter for the chosen verbosity.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Explicit tool from the flag, else from [`TOOL_ENV`].
    #[must_use]
    pub fn tool_override(&self) -> Option<PathBuf> {
        self.h5dump
            .clone()
            .or_else(|| non_empty(std::env::var_os(TOOL_ENV)))
    }
}

/// An empty variable counts as unset.
fn non_empty(value: Option<OsString>) -> Option<PathBuf> {
    value.filter(|v| !v.is_empty()).map(PathBuf::from)
}
