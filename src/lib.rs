//! # show-h5
//!
//! Print the structure and contents of an HDF5 file.
//!
//! show-h5 does not read HDF5 itself. It runs `h5dump`, which handles the
//! format in full (nested variable-length types, jagged arrays), and relays
//! what it prints along with its exit code.
//!
//! ## Tool resolution
//!
//! - An explicit path (`--h5dump` or `SHOW_H5_H5DUMP`) is used as given
//! - Otherwise `h5dump` is looked up on `PATH`
//! - Otherwise the bare name `h5dump` is passed to the launcher

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod error;
pub mod relay;
pub mod tool;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

pub use cli::{Cli, OutputFormat, execute};
pub use relay::{relay, status_byte};
pub use tool::{
    DEFAULT_TOOL_NAME, Invocation, Outcome, ResolvedTool, ToolSource, invoke, resolve_from_env,
    resolve_tool,
};
