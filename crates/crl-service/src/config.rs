use serde::{Deserialize, Serialize};

/// Configuration for the ledger service.
///
/// Constructed once by the hosting process and handed to
/// [`LedgerService`](crate::LedgerService); there is no implicit
/// process-wide instance. The backend is chosen at construction time,
/// not by a runtime flag inside business logic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Organizational tag stamped as `accessor_msp` on every audit entry.
    /// Opaque provenance metadata; the ledger never interprets it.
    pub org_tag: String,
    /// Descriptive network channel name echoed by `status()`.
    pub channel: String,
    /// Descriptive contract name echoed by `status()`.
    pub contract: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            org_tag: "StateMSP".to_string(),
            channel: "census-channel".to_string(),
            contract: "census-contract".to_string(),
        }
    }
}
