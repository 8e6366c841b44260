//! Error types for directory traversal
//!
//! Only root-level failures and pattern compilation are fatal. Unreadable
//! subdirectories are logged and skipped by the walker and never surface here.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, WalkError>;

/// Fatal errors for a single traversal invocation.
#[derive(Error, Debug)]
pub enum WalkError {
    /// Root path does not exist
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    /// Root directory could not be opened
    #[error("cannot open '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    /// Root exists but is not a directory
    #[error("'{}' is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    /// Filename pattern failed to compile
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Extension that the rightmost-dot rule can never produce
    #[error("invalid extension '{ext}': extensions may not contain an inner '.'")]
    InvalidExtension { ext: String },

    /// Any other I/O failure on the root
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WalkError {
    /// Classify an I/O error raised while opening `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.to_path_buf();
        match err.kind() {
            io::ErrorKind::NotFound => WalkError::NotFound { path },
            io::ErrorKind::PermissionDenied => WalkError::PermissionDenied { path },
            _ => WalkError::Io { path, source: err },
        }
    }

    /// Path the error refers to, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WalkError::NotFound { path }
            | WalkError::PermissionDenied { path }
            | WalkError::NotADirectory { path }
            | WalkError::Io { path, .. } => Some(path),
            WalkError::InvalidPattern { .. } | WalkError::InvalidExtension { .. } => None,
        }
    }
}
