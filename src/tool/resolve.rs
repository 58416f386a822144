//! Tool resolution.
//!
//! Picks the program to run: an explicit override wins, then a lookup of
//! [`DEFAULT_TOOL_NAME`] on the executable search path, then the bare name
//! itself so the process launcher reports the missing tool.

use std::ffi::OsStr;
use std::fmt;
use std::path::{Path, PathBuf};

/// Conventional name of the HDF5 dumper.
pub const DEFAULT_TOOL_NAME: &str = "h5dump";

/// Where a resolved tool came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolSource {
    /// Supplied by the caller (flag or environment).
    Explicit,
    /// Found on the executable search path.
    SearchPath,
    /// Nothing found; the bare name is handed to the launcher.
    Fallback,
}

impl fmt::Display for ToolSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Explicit => "explicit",
            Self::SearchPath => "search path",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// A program ready to be launched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTool {
    /// Path or bare name passed to the launcher.
    pub program: PathBuf,
    /// How the program was chosen.
    pub source: ToolSource,
}

impl ResolvedTool {
    /// Creates a tool from an explicit path or name.
    pub fn explicit<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            source: ToolSource::Explicit,
        }
    }
}

/// Resolves the tool against a given search path.
///
/// # Arguments
///
/// * `explicit` - Caller override; used verbatim when present.
/// * `search_path` - Value in `PATH` format to search, if any.
/// * `cwd` - Directory used to resolve relative search path entries.
pub fn resolve_tool(
    explicit: Option<&Path>,
    search_path: Option<&OsStr>,
    cwd: &Path,
) -> ResolvedTool {
    let resolved = if let Some(program) = explicit {
        ResolvedTool::explicit(program)
    } else {
        match which::which_in(DEFAULT_TOOL_NAME, search_path, cwd) {
            Ok(program) => ResolvedTool {
                program,
                source: ToolSource::SearchPath,
            },
            Err(e) => {
                tracing::debug!(error = %e, "{DEFAULT_TOOL_NAME} not found on search path");
                ResolvedTool {
                    program: PathBuf::from(DEFAULT_TOOL_NAME),
                    source: ToolSource::Fallback,
                }
            }
        }
    };

    tracing::debug!(
        program = %resolved.program.display(),
        source = %resolved.source,
        "resolved tool"
    );
    resolved
}

/// Resolves the tool using this process's `PATH` and working directory.
pub fn resolve_from_env(explicit: Option<&Path>) -> ResolvedTool {
    let search_path = std::env::var_os("PATH");
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    resolve_tool(explicit, search_path.as_deref(), &cwd)
}
