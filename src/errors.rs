use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompositeError {
    #[error("child index {index} out of range (node has {len} children)")]
    OutOfRange { index: usize, len: usize },

    #[error("binary composite '{name}' accepts at most 2 children, got {given}")]
    ArityViolation { name: String, given: usize },

    #[error("iterator exhausted: no node left to advance to")]
    IteratorExhausted,

    #[error("iterator cursor is not positioned on a node")]
    InvalidCursor,

    #[error("invalid tree expression at position {position}: {reason}")]
    Parse { position: usize, reason: String },
}

pub type CompositeResult<T> = Result<T, CompositeError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PrototypeError {
    #[error("cannot clone {kind}: {reason}")]
    Unsupported { kind: &'static str, reason: String },
}

pub type PrototypeResult<T> = Result<T, PrototypeError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("config error: {message}")]
    Config { message: String },
}

pub type SettingsResult<T> = Result<T, SettingsError>;
