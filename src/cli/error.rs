//! CLI-level errors (wraps library errors)

use thiserror::Error;

use crate::errors::{CompositeError, PrototypeError, SettingsError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Composite(#[from] CompositeError),

    #[error("{0}")]
    Prototype(#[from] PrototypeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Composite(e) => match e {
                CompositeError::Parse { .. } | CompositeError::ArityViolation { .. } => {
                    crate::exitcode::DATAERR
                }
                CompositeError::OutOfRange { .. }
                | CompositeError::IteratorExhausted
                | CompositeError::InvalidCursor => crate::exitcode::SOFTWARE,
            },
            CliError::Prototype(_) => crate::exitcode::SOFTWARE,
        }
    }
}
