//! Error types for xcproj-core

use std::path::PathBuf;

/// Result type for xcproj-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in xcproj-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The project file parsed but is not a usable project
    #[error("Invalid project: {message}")]
    InvalidProject { message: String },

    /// The project file could not be parsed
    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: xcproj_plist::Error,
    },

    /// An object id is not present in the object table
    #[error("Object not found: {id}")]
    ObjectNotFound { id: String },

    /// An object exists but has a different kind than required
    #[error("Object {id} is a {found}, expected {expected}")]
    UnexpectedKind {
        id: String,
        expected: String,
        found: String,
    },

    /// A file path that names no file below its group
    #[error("Invalid file path '{path}': expected a file name or path")]
    InvalidFilePath { path: String },

    /// Configuration file could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from xcproj-fs
    #[error(transparent)]
    Fs(#[from] xcproj_fs::Error),

    /// Plist error from xcproj-plist
    #[error(transparent)]
    Plist(#[from] xcproj_plist::Error),
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidProject {
            message: message.into(),
        }
    }
}
