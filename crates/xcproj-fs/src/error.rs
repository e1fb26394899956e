//! Filesystem errors

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Failure while locating, reading or writing project files.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No project file found at {path}")]
    ProjectNotFound { path: PathBuf },

    #[error("Could not lock {path} for writing")]
    LockFailed { path: PathBuf },
}

impl Error {
    /// Attach the offending path to an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
