//! Errors surfaced by the `xcproj` binary

pub type Result<T> = std::result::Result<T, CliError>;

/// Anything that makes a command exit non-zero.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Opening, reconciling or saving the project failed
    #[error(transparent)]
    Core(#[from] xcproj_core::Error),

    #[error(transparent)]
    Fs(#[from] xcproj_fs::Error),

    /// Writing to the terminal or reading a piped answer failed
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Prompt failed: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// Bad input from the caller, shown as-is
    #[error("{message}")]
    User { message: String },
}

impl CliError {
    pub fn user(message: impl Into<String>) -> Self {
        Self::User {
            message: message.into(),
        }
    }
}
