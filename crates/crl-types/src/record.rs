use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::{FlagStatus, RecordStatus};

/// The ledger's view of one census record.
///
/// A `LedgerRecord` is created exactly once by an anchor operation and
/// lives for the process lifetime. Each accepted mutation increments
/// `version` by exactly one; a mutation that supplies a new content hash
/// shifts the prior `data_hash` into `previous_hash`, giving every record
/// a backward link to its previous content state (hash-chaining).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRecord {
    /// Caller-assigned unique key, immutable after creation.
    pub record_id: String,
    /// Current canonical hash of the record's hashable fields.
    pub data_hash: String,
    /// Hash held before the most recent content mutation; `None` until the
    /// first mutation that supplied a new hash.
    pub previous_hash: Option<String>,
    /// Opaque foreign reference to the owning household. Not validated.
    pub owner_household_id: String,
    /// Review workflow status.
    pub current_status: RecordStatus,
    /// Triage priority tag.
    pub flag_status: FlagStatus,
    /// Actor who anchored the record. Set once.
    pub created_by: String,
    /// Anchor time. Set once.
    pub created_at: DateTime<Utc>,
    /// Actor behind the most recent mutation.
    pub last_updated_by: String,
    /// Time of the most recent mutation.
    pub last_updated_at: DateTime<Utc>,
    /// Monotonic version, starts at 1 and increments once per mutation.
    pub version: u64,
}

impl LedgerRecord {
    /// Returns `true` if the record has been mutated since creation.
    pub fn has_history(&self) -> bool {
        self.version > 1
    }
}

/// Transient output of an integrity verification query. Never stored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityResult {
    /// The record id the check was run against.
    pub record_id: String,
    /// Whether the provided hash matched the hash committed to the ledger.
    pub verified: bool,
    /// The hash currently committed to the ledger, if the record exists.
    pub on_chain_hash: Option<String>,
    /// The hash derived from the caller's record snapshot.
    pub provided_hash: Option<String>,
    /// The record's review status at check time.
    pub current_status: Option<RecordStatus>,
    /// When the record was last mutated.
    pub last_updated_at: Option<DateTime<Utc>>,
    /// Explanation when the check could not be completed (unknown record).
    pub error: Option<String>,
    /// When this result was generated.
    pub timestamp: DateTime<Utc>,
}

impl IntegrityResult {
    /// A fully populated result for an existing record.
    pub fn checked(
        record_id: impl Into<String>,
        verified: bool,
        on_chain_hash: impl Into<String>,
        provided_hash: impl Into<String>,
        current_status: RecordStatus,
        last_updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            record_id: record_id.into(),
            verified,
            on_chain_hash: Some(on_chain_hash.into()),
            provided_hash: Some(provided_hash.into()),
            current_status: Some(current_status),
            last_updated_at: Some(last_updated_at),
            error: None,
            timestamp: Utc::now(),
        }
    }

    /// A failed result for a record the ledger does not hold.
    pub fn missing(record_id: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            record_id: record_id.into(),
            verified: false,
            on_chain_hash: None,
            provided_hash: None,
            current_status: None,
            last_updated_at: None,
            error: Some(error.into()),
            timestamp: Utc::now(),
        }
    }
}
