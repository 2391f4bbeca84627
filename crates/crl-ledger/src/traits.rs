use crl_types::{
    AuditLogEntry, FlagStatus, IntegrityResult, LedgerRecord, RecordStatus, TxId,
};

use crate::error::LedgerError;

/// Write boundary for ledger mutations and auditable checks.
///
/// Every operation here is a linearizable unit per record id: the state
/// change and its audit-trail append commit together, and the audit entry
/// is durable in-process before the returned transaction id reaches the
/// caller.
pub trait LedgerWriter: Send + Sync {
    /// Anchor a new record.
    ///
    /// Fails with [`LedgerError::AlreadyExists`] if `record_id` is already
    /// present — record ids are unique for the ledger's lifetime. On
    /// success the record is stored at version 1 in `PendingReview` status
    /// and one INITIALIZE audit entry is appended.
    fn create(
        &self,
        record_id: &str,
        data_hash: &str,
        household_id: &str,
        flag_status: FlagStatus,
        actor: &str,
    ) -> Result<TxId, LedgerError>;

    /// Commit a review decision against an existing record.
    ///
    /// `new_status` must be a review decision; `PendingReview` is reachable
    /// only through [`create`](Self::create). When `new_hash` is supplied
    /// the record's current hash is shifted into `previous_hash` before the
    /// new one is stored (hash-chain link). The version increments by
    /// exactly one whether or not the hash changed. One REVIEW audit entry
    /// is appended.
    fn transition(
        &self,
        record_id: &str,
        actor: &str,
        new_status: RecordStatus,
        new_hash: Option<String>,
    ) -> Result<TxId, LedgerError>;

    /// Compare `provided_hash` against the hash committed for `record_id`.
    ///
    /// Read-only with respect to record state, write-only with respect to
    /// the audit trail: every check — including one against an id the
    /// ledger does not hold — appends a VERIFY entry. A mismatch is
    /// reported through the result, never as an error.
    fn check_integrity(
        &self,
        record_id: &str,
        provided_hash: &str,
        actor: &str,
    ) -> Result<IntegrityResult, LedgerError>;

    /// Record that `actor` accessed `record_id`.
    ///
    /// Appends an ACCESS entry unconditionally, even when no such record
    /// exists — access attempts on invalid ids are themselves
    /// security-relevant events.
    fn log_access(&self, record_id: &str, actor: &str, reason: &str) -> Result<TxId, LedgerError>;
}

/// Read boundary for ledger queries.
///
/// All reads return snapshots (copies), never live references, and never a
/// view that straddles an in-flight mutation of the record being read.
pub trait LedgerReader: Send + Sync {
    /// Snapshot of a single record, if present.
    fn record(&self, record_id: &str) -> Result<Option<LedgerRecord>, LedgerError>;

    /// All audit entries for a record id, in insertion order.
    fn audit_trail(&self, record_id: &str) -> Result<Vec<AuditLogEntry>, LedgerError>;

    /// All records currently in the given review status.
    fn records_by_status(&self, status: RecordStatus) -> Result<Vec<LedgerRecord>, LedgerError>;

    /// All records currently carrying the given flag.
    fn records_by_flag(&self, flag: FlagStatus) -> Result<Vec<LedgerRecord>, LedgerError>;

    /// Number of records held by the ledger.
    fn record_count(&self) -> u64;

    /// Number of audit entries appended over the ledger's lifetime.
    fn audit_entry_count(&self) -> u64;

    /// Short label describing this backend (e.g. `"in-memory"`).
    fn mode(&self) -> &'static str;
}

/// The full backend contract: a writer and reader pair with shared state.
///
/// The service facade holds one of these behind an `Arc`; swapping the
/// in-memory store for a consensus-backed one is a construction-time
/// decision, not a runtime branch.
pub trait LedgerBackend: LedgerWriter + LedgerReader {}

impl<T: LedgerWriter + LedgerReader> LedgerBackend for T {}
