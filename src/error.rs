//! Error types for playlist management

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by track construction and playlist storage
#[derive(Debug, Error)]
pub enum PlaylistError {
    /// Track duration must be at least one second
    #[error("invalid duration for '{title}': duration must be > 0 seconds")]
    InvalidDuration { title: String },

    /// Playlist name cannot be mapped to a file
    #[error("invalid playlist name: {0:?}")]
    InvalidName(String),

    /// Saved playlist does not exist
    #[error("playlist file not found: {0:?}")]
    NotFound(PathBuf),

    /// Filesystem error
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Playlist file could not be encoded or decoded
    #[error("malformed playlist file {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
