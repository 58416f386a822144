//! External tool handling.
//!
//! Locates the HDF5 dumper and runs it against a single file, capturing
//! everything it prints.

pub mod invoke;
pub mod resolve;

pub use invoke::{Invocation, Outcome, invoke};
pub use resolve::{DEFAULT_TOOL_NAME, ResolvedTool, ToolSource, resolve_from_env, resolve_tool};
