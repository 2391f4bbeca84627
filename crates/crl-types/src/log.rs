use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ActionType;
use crate::tx::TxId;

/// One immutable fact about an action taken on a ledger record.
///
/// Entries are append-only: no entry is ever mutated or deleted after
/// creation, and every mutating or verifying operation on a record
/// produces exactly one entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditLogEntry {
    /// Ledger-assigned unique identifier, ordering-stable within a record.
    pub log_id: String,
    /// The record this entry describes. Access attempts on ids the ledger
    /// does not hold are still logged, so this is not guaranteed to refer
    /// to an existing record.
    pub record_id: String,
    /// Opaque actor identity supplied by the collaborator.
    pub accessor_id: String,
    /// Organizational tag carried for provenance. Opaque to the ledger.
    pub accessor_msp: String,
    /// Kind of action taken.
    pub action_type: ActionType,
    /// Human-readable justification or decision summary.
    pub details: String,
    /// When the action was committed.
    pub timestamp: DateTime<Utc>,
    /// Transaction under which the action was committed.
    pub tx_id: TxId,
}

impl AuditLogEntry {
    /// One-line human-readable summary of this entry.
    pub fn summary(&self) -> String {
        format!(
            "[{}] {} {} by {}: {}",
            self.timestamp.to_rfc3339(),
            self.action_type,
            self.record_id,
            self.accessor_id,
            self.details
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_contains_action_and_actor() {
        let entry = AuditLogEntry {
            log_id: "LOG_CEN-001_1".into(),
            record_id: "CEN-001".into(),
            accessor_id: "reviewer-7".into(),
            accessor_msp: "StateMSP".into(),
            action_type: ActionType::Review,
            details: "Decision: APPROVED".into(),
            timestamp: Utc::now(),
            tx_id: TxId::new("tx_00000001_20250101120000"),
        };
        let summary = entry.summary();
        assert!(summary.contains("REVIEW"));
        assert!(summary.contains("reviewer-7"));
        assert!(summary.contains("Decision: APPROVED"));
    }

    #[test]
    fn serde_roundtrip() {
        let entry = AuditLogEntry {
            log_id: "LOG_CEN-002_4".into(),
            record_id: "CEN-002".into(),
            accessor_id: "auditor-1".into(),
            accessor_msp: "StateMSP".into(),
            action_type: ActionType::Access,
            details: "welfare eligibility audit".into(),
            timestamp: Utc::now(),
            tx_id: TxId::new("tx_00000002_20250101120000"),
        };
        let json = serde_json::to_string(&entry).unwrap();
        let parsed: AuditLogEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, entry);
        assert!(json.contains("\"ACCESS\""));
    }
}
