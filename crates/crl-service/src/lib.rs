//! High-level service facade for the Census Record Ledger (CRL).
//!
//! [`LedgerService`] is the only entry point collaborators use. It
//! normalizes caller input (status and flag parsing, the permissive
//! flag-status fallback), derives canonical content hashes, and composes
//! the hasher with a [`crl_ledger::LedgerBackend`]. The in-memory backend
//! is the default; any backend implementing the same contract can be
//! injected at construction time.

pub mod config;
pub mod error;
pub mod response;
pub mod service;

pub use config::LedgerConfig;
pub use error::ServiceError;
pub use response::{AccessReceipt, AnchorReceipt, LedgerStatus, ReviewReceipt, SCHEMA_VERSION};
pub use service::LedgerService;
