//! Canonical JSON and content hashing
//!
//! Configuration snapshots are compared by content. Two JSON documents that
//! differ only in object key order have the same canonical form and the same
//! fingerprint.

use crate::Result;
use serde::Serialize;
use serde_json::{Map, Value};
use std::hash::{DefaultHasher, Hash, Hasher};

/// Copy of `value` with the keys of every object in sorted order
///
/// Arrays keep their order; only object keys are reordered.
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let sorted: Map<String, Value> = keys
                .into_iter()
                .map(|key| (key.clone(), canonicalize(&fields[key])))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(canonicalize).collect()),
        scalar => scalar.clone(),
    }
}

/// Compact canonical text of a JSON value
///
/// ```rust
/// use serde_json::json;
/// use tooling::serialization::to_canonical_string;
///
/// let limits = json!({"storage": 100, "members": 1});
/// assert_eq!(to_canonical_string(&limits).unwrap(), r#"{"members":1,"storage":100}"#);
/// ```
pub fn to_canonical_string(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(&canonicalize(value))?)
}

/// Serialize any value, then render it canonically
pub fn to_canonical_json<T: Serialize>(value: &T) -> Result<String> {
    to_canonical_string(&serde_json::to_value(value)?)
}

/// Hash of the canonical text
///
/// Stable within a build of the program; not meant to be persisted.
///
/// ```rust
/// use serde_json::json;
/// use tooling::serialization::json_fingerprint;
///
/// let a = json!({"name": "Hobby", "price": 0});
/// let b = json!({"price": 0, "name": "Hobby"});
/// assert_eq!(json_fingerprint(&a).unwrap(), json_fingerprint(&b).unwrap());
/// ```
pub fn json_fingerprint(value: &Value) -> Result<u64> {
    let mut hasher = DefaultHasher::new();
    to_canonical_string(value)?.hash(&mut hasher);
    Ok(hasher.finish())
}
