//! Error types for beesetup operations.
//!
//! This module defines [`SetupError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Probe failures are not errors: a missing tool is a normal outcome
//! - Install failures are captured per step, not propagated
//! - `SetupError` covers what the caller must see (bad input, I/O)
//! - Use `anyhow::Error` (via `SetupError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for beesetup operations.
#[derive(Debug, Error)]
pub enum SetupError {
    /// External command ran but exited unsuccessfully.
    ///
    /// `detail` is the last non-empty line of captured stderr, if any.
    #[error("`{command}` {}{}", exit_status(.code), detail_suffix(.detail))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        detail: Option<String>,
    },

    /// External command could not be started at all.
    #[error("Failed to start '{command}': {message}")]
    CommandSpawn { command: String, message: String },

    /// A version string that does not look like `major.minor[.patch]`.
    #[error("Invalid version '{input}'")]
    InvalidVersion { input: String },

    /// Header sync source is missing or not a directory.
    #[error("'{}' is not a valid directory", path.display())]
    InvalidSourceDir { path: PathBuf },

    /// Header sync destination resolves to the source directory.
    #[error("'{}' is both the source and the destination", path.display())]
    DestinationIsSource { path: PathBuf },

    /// Copying a single header failed.
    #[error("Failed to copy {}: {source}", path.display())]
    HeaderCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with code {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|line| format!(": {}", line))
        .unwrap_or_default()
}

/// Result type alias for beesetup operations.
pub type Result<T> = std::result::Result<T, SetupError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_code_and_detail() {
        let err = SetupError::CommandFailed {
            command: "apt-get install -y ccache".into(),
            code: Some(100),
            detail: Some("E: Unable to locate package ccache".into()),
        };
        assert_eq!(
            err.to_string(),
            "`apt-get install -y ccache` exited with code 100: E: Unable to locate package ccache"
        );
    }

    #[test]
    fn command_failed_by_signal_without_detail() {
        let err = SetupError::CommandFailed {
            command: "choco install -y git".into(),
            code: None,
            detail: None,
        };
        assert_eq!(
            err.to_string(),
            "`choco install -y git` was terminated by a signal"
        );
    }

    #[test]
    fn command_spawn_displays_command_and_message() {
        let err = SetupError::CommandSpawn {
            command: "brew".into(),
            message: "No such file or directory".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn invalid_version_displays_input() {
        let err = SetupError::InvalidVersion {
            input: "three".into(),
        };
        assert!(err.to_string().contains("three"));
    }

    #[test]
    fn invalid_source_dir_displays_path() {
        let err = SetupError::InvalidSourceDir {
            path: PathBuf::from("/no/such/include"),
        };
        assert!(err.to_string().contains("/no/such/include"));
    }

    #[test]
    fn destination_is_source_displays_path() {
        let err = SetupError::DestinationIsSource {
            path: PathBuf::from("Engine/include"),
        };
        assert!(err.to_string().contains("Engine/include"));
    }

    #[test]
    fn header_copy_keeps_io_source() {
        use std::error::Error as _;
        let err = SetupError::HeaderCopy {
            path: PathBuf::from("a/b/x.h"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("a/b/x.h"));
        assert!(err.source().is_some());
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SetupError = io_err.into();
        assert!(matches!(err, SetupError::Io(_)));
    }
}
