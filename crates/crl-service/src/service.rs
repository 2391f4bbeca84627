use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crl_hash::{compute_record_hash, RecordFields};
use crl_ledger::{InMemoryLedger, LedgerBackend, LedgerReader, LedgerWriter};
use crl_types::{AuditLogEntry, FlagStatus, IntegrityResult, LedgerRecord, RecordStatus};

use crate::config::LedgerConfig;
use crate::error::ServiceError;
use crate::response::{AccessReceipt, AnchorReceipt, LedgerStatus, ReviewReceipt, SCHEMA_VERSION};

/// The ledger facade: the sole boundary surface collaborators call.
///
/// Composes the canonical hasher with a ledger backend. Cheap to share:
/// the hosting process constructs one and hands it by reference to every
/// collaborator needing ledger access.
pub struct LedgerService {
    config: LedgerConfig,
    backend: Arc<dyn LedgerBackend>,
}

impl LedgerService {
    /// Build a service over the in-memory backend.
    pub fn new(config: LedgerConfig) -> Self {
        let backend = Arc::new(InMemoryLedger::new(config.org_tag.clone()));
        Self { config, backend }
    }

    /// Build a service over an injected backend.
    ///
    /// This is the substitution point for a consensus-backed store: any
    /// implementation of the backend contract slots in here without
    /// changing callers.
    pub fn with_backend(config: LedgerConfig, backend: Arc<dyn LedgerBackend>) -> Self {
        Self { config, backend }
    }

    /// Anchor a new census record onto the ledger.
    ///
    /// Extracts `record_id` and `household_id` from the raw record,
    /// normalizes `flag_status` (an invalid or absent flag anchors as
    /// `NORMAL` rather than rejecting), computes the canonical content
    /// hash, and commits the record in `PENDING_REVIEW` status.
    pub fn anchor(&self, record: &RecordFields, actor: &str) -> Result<AnchorReceipt, ServiceError> {
        let record_id = field_str(record, "record_id")
            .filter(|id| !id.is_empty())
            .ok_or(ServiceError::MissingField { field: "record_id" })?;
        let household_id = field_str(record, "household_id").unwrap_or_default();
        let flag_status = parse_flag(record.get("flag_status"));

        let data_hash = compute_record_hash(record)?;
        let tx_id = self
            .backend
            .create(&record_id, &data_hash, &household_id, flag_status, actor)?;

        Ok(AnchorReceipt {
            tx_id,
            record_id,
            data_hash,
            status: RecordStatus::PendingReview,
            ledger_anchored: true,
        })
    }

    /// Commit a review decision for a record.
    ///
    /// `decision` is upper-cased and must name a non-initial status;
    /// `PENDING_REVIEW` is reachable only through anchoring. When
    /// `updated_record` is supplied its hash is recomputed and chained
    /// onto the ledger — this is how corrected data enters the history.
    pub fn review(
        &self,
        record_id: &str,
        reviewer: &str,
        decision: &str,
        updated_record: Option<&RecordFields>,
    ) -> Result<ReviewReceipt, ServiceError> {
        let new_status = decision
            .trim()
            .to_uppercase()
            .parse::<RecordStatus>()
            .ok()
            .filter(|status| status.is_review_decision())
            .ok_or_else(|| ServiceError::InvalidDecision {
                decision: decision.to_string(),
            })?;

        let new_hash = updated_record.map(compute_record_hash).transpose()?;
        let tx_id = self
            .backend
            .transition(record_id, reviewer, new_status, new_hash.clone())?;

        Ok(ReviewReceipt {
            tx_id,
            record_id: record_id.to_string(),
            new_status,
            new_hash,
        })
    }

    /// Verify that a record's current data matches the ledger.
    ///
    /// The hash is always re-derived from `current_record` here — the
    /// facade never accepts a caller-supplied hash, so a caller cannot
    /// spoof a match by fabricating a hash string. A mismatch is reported
    /// through the result (`verified = false`), never as an error.
    pub fn verify(
        &self,
        record_id: &str,
        current_record: &RecordFields,
        accessor: &str,
    ) -> Result<IntegrityResult, ServiceError> {
        let provided_hash = compute_record_hash(current_record)?;
        Ok(self
            .backend
            .check_integrity(record_id, &provided_hash, accessor)?)
    }

    /// Log that `actor` accessed a record. Never fails on unknown ids:
    /// the attempt itself is the event being captured.
    pub fn log_access(
        &self,
        record_id: &str,
        actor: &str,
        reason: &str,
    ) -> Result<AccessReceipt, ServiceError> {
        let tx_id = self.backend.log_access(record_id, actor, reason)?;
        Ok(AccessReceipt {
            tx_id,
            record_id: record_id.to_string(),
            logged: true,
        })
    }

    /// Snapshot of a ledger record, if present.
    pub fn record(&self, record_id: &str) -> Result<Option<LedgerRecord>, ServiceError> {
        Ok(self.backend.record(record_id)?)
    }

    /// All audit entries for a record id, in insertion order.
    pub fn audit_trail(&self, record_id: &str) -> Result<Vec<AuditLogEntry>, ServiceError> {
        Ok(self.backend.audit_trail(record_id)?)
    }

    /// All records currently in the given review status.
    pub fn records_by_status(
        &self,
        status: RecordStatus,
    ) -> Result<Vec<LedgerRecord>, ServiceError> {
        Ok(self.backend.records_by_status(status)?)
    }

    /// All records currently carrying the given flag.
    pub fn records_by_flag(&self, flag: FlagStatus) -> Result<Vec<LedgerRecord>, ServiceError> {
        Ok(self.backend.records_by_flag(flag)?)
    }

    /// Operational metadata for observability. Read-only.
    pub fn status(&self) -> LedgerStatus {
        LedgerStatus {
            schema_version: SCHEMA_VERSION,
            mode: self.backend.mode().to_string(),
            org_tag: self.config.org_tag.clone(),
            channel: self.config.channel.clone(),
            contract: self.config.contract.clone(),
            record_count: self.backend.record_count(),
            audit_entry_count: self.backend.audit_entry_count(),
        }
    }
}

fn field_str(record: &RecordFields, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn parse_flag(value: Option<&Value>) -> FlagStatus {
    let Some(raw) = value.and_then(Value::as_str) else {
        return FlagStatus::Normal;
    };
    match raw.trim().to_uppercase().parse() {
        Ok(flag) => flag,
        Err(_) => {
            debug!(flag = raw, "invalid flag status, defaulting to NORMAL");
            FlagStatus::Normal
        }
    }
}
