//! Foundation types for the Census Record Ledger (CRL).
//!
//! This crate provides the core record, audit, and status types used
//! throughout the CRL system. Every other CRL crate depends on `crl-types`.
//!
//! # Key Types
//!
//! - [`LedgerRecord`] — The ledger's view of one census record
//! - [`AuditLogEntry`] — One immutable fact about an action taken on a record
//! - [`IntegrityResult`] — Transient output of an integrity verification
//! - [`RecordStatus`] — Review workflow status (closed enumeration)
//! - [`FlagStatus`] — Triage priority tag, distinct from review status
//! - [`ActionType`] — Kind of audited action
//! - [`TxId`] — Opaque transaction identifier assigned per committed operation

pub mod error;
pub mod log;
pub mod record;
pub mod status;
pub mod tx;

pub use error::TypeError;
pub use log::AuditLogEntry;
pub use record::{IntegrityResult, LedgerRecord};
pub use status::{ActionType, FlagStatus, RecordStatus};
pub use tx::TxId;
