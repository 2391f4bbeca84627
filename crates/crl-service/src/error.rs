use crl_hash::HashError;
use crl_ledger::LedgerError;
use thiserror::Error;

/// Errors surfaced at the service boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The review decision is not one of the non-initial status values.
    #[error("invalid review decision: {decision}")]
    InvalidDecision { decision: String },

    /// The anchor input lacks a required field.
    #[error("record is missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    Hash(#[from] HashError),
}
