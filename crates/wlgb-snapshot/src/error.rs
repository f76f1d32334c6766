//! Snapshot error types.

use thiserror::Error;

/// Result type for snapshot operations.
pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Errors that can occur while persisting a candidate snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// IO error while writing changed files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Project name is empty or not usable as a directory name.
    #[error("invalid project name: {0:?}")]
    InvalidProjectName(String),

    /// File path would escape the project's attachment directory.
    #[error("unsafe file path: {0:?}")]
    UnsafePath(String),
}

impl SnapshotError {
    /// Create an invalid project name error.
    pub fn invalid_project_name(name: impl Into<String>) -> Self {
        Self::InvalidProjectName(name.into())
    }

    /// Create an unsafe path error.
    pub fn unsafe_path(path: impl Into<String>) -> Self {
        Self::UnsafePath(path.into())
    }
}
