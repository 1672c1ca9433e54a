//! Upload error types.

use std::fmt;
use thiserror::Error;

/// Why an upload failed.
#[derive(Error, Debug)]
pub enum UploadError {
    /// The remote could not be reached or the transfer was cut short.
    #[error("network error: {0}")]
    Network(String),

    /// The remote rejected the credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// Bucket or container does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// A required environment variable is not set.
    #[error("missing credentials: {0} is not set")]
    MissingCredentials(&'static str),

    /// Reading the local file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("upload failed: {0}")]
    Unknown(String),
}

/// Closed set of failure categories reported to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UploadErrorKind {
    Network,
    Auth,
    NotFound,
    Unknown,
}

impl UploadError {
    pub fn kind(&self) -> UploadErrorKind {
        match self {
            UploadError::Network(_) => UploadErrorKind::Network,
            UploadError::Auth(_) | UploadError::MissingCredentials(_) => UploadErrorKind::Auth,
            UploadError::NotFound(_) => UploadErrorKind::NotFound,
            UploadError::Io(e) if e.kind() == std::io::ErrorKind::NotFound => {
                UploadErrorKind::NotFound
            }
            UploadError::Io(_) | UploadError::Unknown(_) => UploadErrorKind::Unknown,
        }
    }
}

impl fmt::Display for UploadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadErrorKind::Network => "network",
            UploadErrorKind::Auth => "auth",
            UploadErrorKind::NotFound => "not_found",
            UploadErrorKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

impl From<object_store::Error> for UploadError {
    fn from(err: object_store::Error) -> Self {
        match err {
            object_store::Error::NotFound { path, .. } => UploadError::NotFound(path),
            object_store::Error::PermissionDenied { path, source }
            | object_store::Error::Unauthenticated { path, source } => {
                UploadError::Auth(format!("{path}: {source}"))
            }
            object_store::Error::Generic { store, source } => {
                UploadError::Network(format!("{store}: {source}"))
            }
            other => UploadError::Unknown(other.to_string()),
        }
    }
}
