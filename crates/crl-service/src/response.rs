//! Response envelopes emitted at the service boundary.
//!
//! These are the explicit, versioned serialization schema for
//! collaborators; internal ledger state is never exposed by reflection.

use serde::{Deserialize, Serialize};

use crl_types::{RecordStatus, TxId};

/// Version of the response envelope schema.
pub const SCHEMA_VERSION: u32 = 1;

/// Result of anchoring a new record onto the ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnchorReceipt {
    pub tx_id: TxId,
    pub record_id: String,
    /// Canonical content hash committed for the record.
    pub data_hash: String,
    /// Always the initial status.
    pub status: RecordStatus,
    pub ledger_anchored: bool,
}

/// Result of committing a review decision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewReceipt {
    pub tx_id: TxId,
    pub record_id: String,
    pub new_status: RecordStatus,
    /// Present only when corrected data was chained onto the ledger.
    pub new_hash: Option<String>,
}

/// Result of logging an access event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessReceipt {
    pub tx_id: TxId,
    pub record_id: String,
    pub logged: bool,
}

/// Operational metadata about the service. Read-only, no side effects.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStatus {
    pub schema_version: u32,
    /// Backend label, e.g. `"in-memory"`.
    pub mode: String,
    pub org_tag: String,
    pub channel: String,
    pub contract: String,
    pub record_count: u64,
    pub audit_entry_count: u64,
}
