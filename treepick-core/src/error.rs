//! src/error.rs
//! ============================================================================
//! # `AppError`: Unified Error Type for treepick
//!
//! Every fallible operation in the library returns `Result<T, AppError>`.
//! Only startup can actually fail: once the tree is built and the terminal is
//! up, the navigation engine absorbs its own edge cases (stale selections,
//! unreadable subdirectories) instead of surfacing them.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all treepick operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// The browse target exists but is not a directory.
    #[error("Not a directory: {0:?}")]
    RootNotDirectory(PathBuf),

    /// The browse target could not be opened at all.
    #[error("Cannot read {path:?}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// TOML config serialization error.
    #[error("Config serialize error: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Config file I/O error with path.
    #[error("Failed to access config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No home/config directory could be determined for this platform.
    #[error("Could not determine the {0} directory")]
    ConfigDir(&'static str),

    /// Neither stdout nor `/dev/tty` can host the UI.
    #[error("No controlling terminal available: {0}")]
    NoTerminal(#[source] io::Error),

    /// Tracing subscriber could not be installed.
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl AppError {
    /// Wrap an I/O failure on the root directory.
    pub fn root_unreadable<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::RootUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O failure on a config file.
    pub fn config_io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_errors_name_the_path() {
        let err = AppError::root_unreadable(
            "/nope",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/nope"));
        assert!(msg.contains("denied"));

        let err = AppError::RootNotDirectory(PathBuf::from("/etc/hosts"));
        assert_eq!(err.to_string(), "Not a directory: \"/etc/hosts\"");
    }

    #[test]
    fn io_failures_keep_their_context_and_source() {
        use std::error::Error as _;

        let err = AppError::config_io("/cfg/config.toml", io::Error::other("boom"));
        assert!(err.to_string().contains("/cfg/config.toml"));
        assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("boom"));

        let err = AppError::NoTerminal(io::Error::from(io::ErrorKind::NotFound));
        assert!(err.source().is_some());
    }
}
