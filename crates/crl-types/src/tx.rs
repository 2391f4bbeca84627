use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque transaction identifier assigned to each committed operation.
///
/// In the in-memory store a `TxId` is minted from a process-local counter
/// and a coarse timestamp; a consensus-backed store would mint it from the
/// network. Callers and the service layer must treat it as opaque and never
/// parse it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxId(String);

impl TxId {
    /// Wrap an identifier produced by a ledger backend.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<TxId> for String {
    fn from(id: TxId) -> Self {
        id.0
    }
}
