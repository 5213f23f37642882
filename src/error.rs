//! Error types for rootfs filesystem operations
//!
//! Every operation in this crate reports failure through [`FsError`]. The
//! variants follow a small taxonomy that callers can match on through
//! [`FsError::kind`]:
//!
//! - **`NotFound`**: the path is absent or is not of the required type
//! - **`Io`**: the OS reported a failure; the `std::io::Error` is preserved
//! - **`InvalidArgument`**: a required argument was empty
//!
//! Best-effort tree removal additionally reports [`FsError::PartialRemoval`],
//! which classifies as `Io`.

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FsError>;

/// Coarse classification of an [`FsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Path absent or not of the required type
    NotFound,
    /// Underlying OS operation failed
    Io,
    /// A required argument was missing
    InvalidArgument,
}

/// A single entry that could not be removed during best-effort removal
#[derive(Debug)]
pub struct RemovalFailure {
    /// Entry that is still on disk
    pub path: PathBuf,
    /// Error reported by the OS
    pub source: std::io::Error,
}

impl fmt::Display for RemovalFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.source)
    }
}

/// Errors produced by rootfs filesystem operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FsError {
    /// The path does not exist or is not of the required type
    #[error("not found: {}", path.display())]
    NotFound {
        /// Path that was looked up
        path: PathBuf,
    },

    /// An OS-level operation failed
    #[error("could not {op} {}: {source}", path.display())]
    Io {
        /// Short name of the step that failed (e.g. "open", "mkdir")
        op: &'static str,
        /// Path the step operated on
        path: PathBuf,
        /// Underlying system error
        #[source]
        source: std::io::Error,
    },

    /// A required argument was missing or empty
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Best-effort removal finished but left entries behind
    #[error(
        "could not fully remove {}: {} entries remain ({})",
        path.display(),
        failures.len(),
        summarize(failures)
    )]
    PartialRemoval {
        /// Root of the tree being removed
        path: PathBuf,
        /// Every entry that could not be removed
        failures: Vec<RemovalFailure>,
    },
}

impl FsError {
    /// Build an [`FsError::Io`] for `op` on `path`
    pub fn io(op: &'static str, path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Build an [`FsError::NotFound`] for `path`
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Classify this error into the crate taxonomy
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io { .. } | Self::PartialRemoval { .. } => ErrorKind::Io,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    /// The underlying system error, if this error carries exactly one
    #[must_use]
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

fn summarize(failures: &[RemovalFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(FsError::not_found("/x").kind(), ErrorKind::NotFound);
        assert_eq!(
            FsError::io("open", "/x", io::Error::from(io::ErrorKind::PermissionDenied)).kind(),
            ErrorKind::Io
        );
        assert_eq!(
            FsError::InvalidArgument("empty path".into()).kind(),
            ErrorKind::InvalidArgument
        );
        let partial = FsError::PartialRemoval {
            path: PathBuf::from("/x"),
            failures: Vec::new(),
        };
        assert_eq!(partial.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_io_message_names_path_and_cause() {
        let err = FsError::io(
            "mkdir",
            "/tmp/a/b",
            io::Error::from_raw_os_error(libc::EACCES),
        );
        let msg = err.to_string();
        assert!(msg.starts_with("could not mkdir /tmp/a/b: "), "{msg}");
        assert_eq!(err.io_error().and_then(io::Error::raw_os_error), Some(libc::EACCES));
    }

    #[test]
    fn test_partial_removal_lists_failures() {
        let err = FsError::PartialRemoval {
            path: PathBuf::from("/r"),
            failures: vec![
                RemovalFailure {
                    path: PathBuf::from("/r/a"),
                    source: io::Error::from_raw_os_error(libc::EACCES),
                },
                RemovalFailure {
                    path: PathBuf::from("/r"),
                    source: io::Error::from_raw_os_error(libc::ENOTEMPTY),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("2 entries remain"), "{msg}");
        assert!(msg.contains("/r/a: "), "{msg}");
        assert!(err.io_error().is_none());
    }
}
