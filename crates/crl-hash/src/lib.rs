//! Canonical content hashing for census records.
//!
//! A census record's fingerprint must be reproducible regardless of field
//! ordering, numeric representation, or storage metadata. This crate
//! normalizes a record down to its allow-listed semantic fields, encodes
//! them as compact key-sorted JSON, and digests that encoding with SHA-256.
//!
//! Same logical input always yields the same lowercase hex digest, on any
//! platform.

pub mod canonical;

pub use canonical::{
    compute_record_hash, verify_record_hash, HashError, RecordFields, HASHABLE_FIELDS,
};
