use crl_types::RecordStatus;

/// Errors produced by ledger operations.
///
/// A failed operation never partially mutates state: it either fully
/// commits (record change plus audit entry) or has no effect. A failed
/// integrity verification is not an error — it is returned as a
/// `verified = false` result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    #[error("record {record_id} already exists on ledger")]
    AlreadyExists { record_id: String },

    #[error("record {record_id} not found on ledger")]
    NotFound { record_id: String },

    #[error("{status} is not a valid review transition")]
    InvalidTransition { status: RecordStatus },

    #[error("ledger state lock poisoned")]
    LockPoisoned,
}
