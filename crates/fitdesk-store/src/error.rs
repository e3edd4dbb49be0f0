//! Error types for fitdesk storage.

use std::path::PathBuf;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors that can occur in storage operations.
///
/// Malformed individual records are not errors at this level; they are
/// skipped with a warning during load. Only whole-file problems surface.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Reading or replacing the backing file failed.
    #[error("file I/O failed for {}: {source}", path.display())]
    Io {
        /// The store's backing file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
