//! Error types for xcproj-plist

/// Result type for plist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading a property list
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String },

    #[error("Root value must be a dictionary")]
    RootNotDictionary,
}
