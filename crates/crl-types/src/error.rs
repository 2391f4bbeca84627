use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown record status: {0}")]
    UnknownStatus(String),

    #[error("unknown flag status: {0}")]
    UnknownFlag(String),

    #[error("unknown action type: {0}")]
    UnknownAction(String),
}
