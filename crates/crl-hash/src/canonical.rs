use std::collections::BTreeMap;

use serde_json::Value;
use sha2::{Digest, Sha256};

/// A raw census record as supplied by collaborators: field name → value.
pub type RecordFields = serde_json::Map<String, Value>;

/// The semantic census fields covered by the content hash.
///
/// Only these fields participate in hashing. Storage metadata, timestamps,
/// and workflow state are deliberately excluded: including them would make
/// the hash unstable across storage-layer changes unrelated to the record's
/// substance.
pub const HASHABLE_FIELDS: [&str; 28] = [
    "record_id",
    "household_id",
    "name",
    "age",
    "sex",
    "relation",
    "caste",
    "income",
    "region",
    "district",
    "state",
    "pin_code",
    "latitude",
    "longitude",
    "welfare_score",
    "ration_card_type",
    "scheme_enrollment_count",
    "employment_status",
    "occupation_category",
    "sector",
    "housing_type",
    "water_source",
    "toilet_access",
    "cooking_fuel",
    "internet_access",
    "household_size",
    "parent_id",
    "spouse_id",
];

/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HashError {
    #[error("canonical encoding failed: {0}")]
    Serialization(String),
}

/// Compute the canonical SHA-256 content hash of a census record.
///
/// For each allow-listed field present in `record`, the value is reduced to
/// its canonical string form: null becomes the empty string, numbers their
/// decimal form, booleans `true`/`false`. Absent fields are omitted
/// entirely rather than zero-filled, so two records differing only in which
/// optional fields are present hash differently. The normalized fields are
/// encoded as compact JSON with sorted keys and digested with SHA-256.
///
/// Returns the lowercase hex digest.
pub fn compute_record_hash(record: &RecordFields) -> Result<String, HashError> {
    let mut canonical: BTreeMap<&str, String> = BTreeMap::new();
    for field in HASHABLE_FIELDS {
        if let Some(value) = record.get(field) {
            canonical.insert(field, canonical_value(value));
        }
    }

    let encoded =
        serde_json::to_string(&canonical).map_err(|e| HashError::Serialization(e.to_string()))?;

    let digest = Sha256::digest(encoded.as_bytes());
    Ok(hex::encode(digest))
}

/// Verify that a record's computed hash equals `expected`.
///
/// Pure comparison, no side effects. A record that cannot be canonicalized
/// never matches.
pub fn verify_record_hash(record: &RecordFields, expected: &str) -> bool {
    match compute_record_hash(record) {
        Ok(computed) => computed == expected,
        Err(_) => false,
    }
}

fn canonical_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        // Nested structures are not expected in allow-listed fields, but a
        // compact encoding keeps the hash deterministic if one appears.
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn fields(value: Value) -> RecordFields {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn hash_is_deterministic() {
        let record = fields(json!({
            "record_id": "CEN-001",
            "name": "Asha",
            "income": 1000,
        }));
        assert_eq!(
            compute_record_hash(&record).unwrap(),
            compute_record_hash(&record).unwrap()
        );
    }

    #[test]
    fn hash_is_lowercase_hex_of_expected_length() {
        let record = fields(json!({ "record_id": "CEN-001" }));
        let hash = compute_record_hash(&record).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn non_allowlisted_fields_never_affect_the_hash() {
        let base = fields(json!({ "record_id": "CEN-001", "income": 1000 }));
        let mut noisy = base.clone();
        noisy.insert("updated_at".into(), json!("2025-01-01T00:00:00Z"));
        noisy.insert("_storage_version".into(), json!(7));
        assert_eq!(
            compute_record_hash(&base).unwrap(),
            compute_record_hash(&noisy).unwrap()
        );
    }

    #[test]
    fn every_allowlisted_field_affects_the_hash() {
        let base = fields(json!({ "record_id": "CEN-001" }));
        let base_hash = compute_record_hash(&base).unwrap();
        for field in HASHABLE_FIELDS {
            if field == "record_id" {
                continue;
            }
            let mut changed = base.clone();
            changed.insert(field.into(), json!("x"));
            assert_ne!(
                compute_record_hash(&changed).unwrap(),
                base_hash,
                "adding {field} should change the hash"
            );
        }
    }

    #[test]
    fn absent_and_null_fields_hash_differently() {
        let absent = fields(json!({ "record_id": "CEN-001" }));
        let null = fields(json!({ "record_id": "CEN-001", "spouse_id": null }));
        assert_ne!(
            compute_record_hash(&absent).unwrap(),
            compute_record_hash(&null).unwrap()
        );
    }

    #[test]
    fn numbers_hash_by_decimal_form() {
        let int_record = fields(json!({ "record_id": "CEN-001", "income": 1000 }));
        let str_record = fields(json!({ "record_id": "CEN-001", "income": "1000" }));
        // An integer and its decimal string normalize identically.
        assert_eq!(
            compute_record_hash(&int_record).unwrap(),
            compute_record_hash(&str_record).unwrap()
        );
    }

    #[test]
    fn verify_matches_only_the_true_content() {
        let record = fields(json!({ "record_id": "CEN-001", "name": "Asha", "income": 1000 }));
        let hash = compute_record_hash(&record).unwrap();
        assert!(verify_record_hash(&record, &hash));

        let mut tampered = record.clone();
        tampered.insert("income".into(), json!(1200));
        assert!(!verify_record_hash(&tampered, &hash));
    }

    proptest! {
        #[test]
        fn hash_ignores_arbitrary_metadata_keys(
            extra_key in "[a-z_]{1,12}",
            extra_value in any::<i64>(),
        ) {
            prop_assume!(!HASHABLE_FIELDS.contains(&extra_key.as_str()));
            let base = fields(json!({ "record_id": "CEN-900", "income": 555 }));
            let mut noisy = base.clone();
            noisy.insert(extra_key, json!(extra_value));
            prop_assert_eq!(
                compute_record_hash(&base).unwrap(),
                compute_record_hash(&noisy).unwrap()
            );
        }

        #[test]
        fn changing_an_allowlisted_value_changes_the_hash(income in any::<i64>()) {
            let base = fields(json!({ "record_id": "CEN-901", "income": income }));
            let changed = fields(json!({ "record_id": "CEN-901", "income": income.wrapping_add(1) }));
            prop_assert_ne!(
                compute_record_hash(&base).unwrap(),
                compute_record_hash(&changed).unwrap()
            );
        }
    }
}
