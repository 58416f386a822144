//! CLI command implementation.

use crate::cli::parser::Cli;
use crate::error::Result;
use crate::tool::{Outcome, invoke, resolve_from_env};

/// Executes the CLI command.
///
/// Resolves the dump tool, runs it on the requested file and returns what
/// should be relayed. A tool that runs and fails yields
/// [`Outcome::Failure`], not an error.
///
/// # Errors
///
/// Returns an error if the tool cannot be launched.
pub fn execute(cli: &Cli) -> Result<Outcome> {
    let tool = resolve_from_env(cli.tool_override().as_deref());
    let run = invoke(&tool, &cli.filename)?;
    Ok(run.outcome())
}
