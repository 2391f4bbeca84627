//! Authoritative record store and audit trail for the Census Record Ledger.
//!
//! This crate is the heart of CRL. It provides:
//! - `LedgerWriter` / `LedgerReader` trait boundaries (the backend contract)
//! - `InMemoryLedger` implementation with per-record atomicity
//! - Transaction-id generation for committed operations
//!
//! The in-memory store is one implementation of the backend contract; a
//! consensus-backed store implementing the same traits can be substituted
//! at construction time without changing callers.

pub mod error;
pub mod memory;
pub mod traits;
pub mod txid;

pub use error::LedgerError;
pub use memory::InMemoryLedger;
pub use traits::{LedgerBackend, LedgerReader, LedgerWriter};
pub use txid::TxIdGenerator;
