//! Error types for show-h5.
//!
//! A failing `h5dump` run is not an error here: it is relayed as an
//! [`Outcome::Failure`](crate::tool::Outcome::Failure). These variants cover
//! what can go wrong in the wrapper itself.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for show-h5 operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the wrapper.
#[derive(Error, Debug)]
pub enum Error {
    /// The external tool could not be started.
    #[error("failed to launch {}: {source}", program.display())]
    Launch {
        /// Program that was handed to the process launcher.
        program: PathBuf,
        /// Underlying launcher error.
        #[source]
        source: std::io::Error,
    },

    /// Writing captured output to our own stdout or stderr failed.
    #[error("failed to relay output: {0}")]
    Relay(#[from] std::io::Error),
}

impl Error {
    /// Short machine-readable name of the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Launch { .. } => "launch",
            Self::Relay(_) => "relay",
        }
    }

    /// Returns true if the launcher reported the program as missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::Launch { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_launch_error_display() {
        let err = Error::Launch {
            program: PathBuf::from("h5dump"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "failed to launch h5dump: No such file or directory"
        );
        assert_eq!(err.kind(), "launch");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_launch_error_permission_is_not_not_found() {
        let err = Error::Launch {
            program: PathBuf::from("/opt/hdf5/bin/h5dump"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_not_found());
        assert!(err.to_string().contains("/opt/hdf5/bin/h5dump"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = io::Error::new(io::ErrorKind::WriteZero, "stdout closed");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Relay(_)));
        assert_eq!(err.kind(), "relay");
        assert_eq!(err.to_string(), "failed to relay output: stdout closed");
    }
}
