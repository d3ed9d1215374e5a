//! Immutable configuration tree and dotted-path lookup
//!
//! The tree is built once at startup and shared by reference afterwards.
//! Cloning is cheap: all clones point at the same record.
//!
//! # Example
//!
//! ```rust
//! use tenant_config::ConfigTree;
//! use tooling::config::MapEnv;
//!
//! let tree = ConfigTree::from_env(&MapEnv::new());
//!
//! assert_eq!(tree.get_i64("subscription.FREE.limits.storage"), Some(100));
//! assert!(tree.resolve("subscription.FREE.limits.bandwidth").is_none());
//! ```

use crate::builder::ConfigBuilder;
use crate::error::{ConfigError, Result};
use crate::value::{ConfigValue, Record};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::Arc;
use tooling::config::{EnvSource, ProcessEnv};
use tooling::logging::is_sensitive_key;
use tooling::serialization::json_fingerprint;

const REDACTED: &str = "[REDACTED]";

/// Resolved configuration, never mutated after construction
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigTree {
    root: Arc<Record>,
}

impl ConfigTree {
    /// Wrap a fully built record
    pub fn from_record(root: Record) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    /// Build from an environment source with the documented defaults
    pub fn from_env<E: EnvSource + ?Sized>(env: &E) -> Self {
        ConfigBuilder::new(env).build()
    }

    /// Build from the process environment
    pub fn from_process_env() -> Self {
        Self::from_env(&ProcessEnv)
    }

    /// Top-level record
    pub fn root(&self) -> &Record {
        &self.root
    }

    /// Look up the value at a dotted path such as `"subscription.FREE.limits.storage"`
    ///
    /// Returns `None` when any segment is missing or an intermediate value is
    /// not a record. Present values are returned as-is, including `0`,
    /// `false` and empty lists.
    pub fn resolve(&self, path: &str) -> Option<&ConfigValue> {
        self.resolve_segments(path.split('.'))
    }

    /// Look up a value by its path segments
    pub fn resolve_segments<I, S>(&self, segments: I) -> Option<&ConfigValue>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segments = segments.into_iter();
        let first = segments.next()?;
        let mut current = self.root.get(first.as_ref())?;

        for segment in segments {
            current = current.as_record()?.get(segment.as_ref())?;
        }

        Some(current)
    }

    /// Whether a value exists at `path`
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.resolve(path)?.as_str()
    }

    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.resolve(path)?.as_i64()
    }

    pub fn get_f64(&self, path: &str) -> Option<f64> {
        self.resolve(path)?.as_f64()
    }

    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.resolve(path)?.as_bool()
    }

    pub fn get_pattern(&self, path: &str) -> Option<&Regex> {
        self.resolve(path)?.as_pattern()
    }

    pub fn get_list(&self, path: &str) -> Option<&[ConfigValue]> {
        self.resolve(path)?.as_list()
    }

    pub fn get_record(&self, path: &str) -> Option<&Record> {
        self.resolve(path)?.as_record()
    }

    /// Like [`get_str`](Self::get_str), but reports why the lookup failed
    pub fn require_str(&self, path: &str) -> Result<&str> {
        self.require(path, "string", ConfigValue::as_str)
    }

    pub fn require_i64(&self, path: &str) -> Result<i64> {
        self.require(path, "integer", ConfigValue::as_i64)
    }

    pub fn require_f64(&self, path: &str) -> Result<f64> {
        self.require(path, "float", ConfigValue::as_f64)
    }

    pub fn require_bool(&self, path: &str) -> Result<bool> {
        self.require(path, "boolean", ConfigValue::as_bool)
    }

    pub fn require_pattern(&self, path: &str) -> Result<&Regex> {
        self.require(path, "pattern", ConfigValue::as_pattern)
    }

    pub fn require_list(&self, path: &str) -> Result<&[ConfigValue]> {
        self.require(path, "list", ConfigValue::as_list)
    }

    /// Strings of a list, in order. Non-string items are an error.
    pub fn require_strings(&self, path: &str) -> Result<Vec<String>> {
        self.require_list(path)?
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::TypeMismatch {
                        path: path.to_string(),
                        expected: "string",
                        found: item.kind(),
                    })
            })
            .collect()
    }

    fn require<'a, T>(
        &'a self,
        path: &str,
        expected: &'static str,
        extract: impl FnOnce(&'a ConfigValue) -> Option<T>,
    ) -> Result<T> {
        let value = self.resolve(path).ok_or_else(|| ConfigError::Missing {
            path: path.to_string(),
        })?;
        let found = value.kind();
        extract(value).ok_or_else(|| ConfigError::TypeMismatch {
            path: path.to_string(),
            expected,
            found,
        })
    }

    /// Dotted paths of every non-record value, depth first in key order
    pub fn leaf_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        collect_leaf_paths(&self.root, "", &mut paths);
        paths
    }

    /// Render the whole tree as JSON
    pub fn to_json(&self) -> Value {
        record_to_json(&self.root, false)
    }

    /// Render as JSON with credential-like string leaves masked
    ///
    /// Empty strings stay empty so the dump still shows which integrations
    /// are unconfigured.
    pub fn to_redacted_json(&self) -> Value {
        record_to_json(&self.root, true)
    }

    /// Content hash, independent of field order
    pub fn fingerprint(&self) -> Result<u64> {
        Ok(json_fingerprint(&self.to_json())?)
    }
}

fn collect_leaf_paths(record: &Record, prefix: &str, out: &mut Vec<String>) {
    for (key, value) in record {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            ConfigValue::Record(nested) => collect_leaf_paths(nested, &path, out),
            _ => out.push(path),
        }
    }
}

fn record_to_json(record: &Record, redact: bool) -> Value {
    let fields: Map<String, Value> = record
        .iter()
        .map(|(key, value)| {
            let json = match value {
                ConfigValue::Record(nested) => record_to_json(nested, redact),
                ConfigValue::String(s) if redact && !s.is_empty() && is_sensitive_key(key) => {
                    Value::String(REDACTED.to_string())
                }
                other => other.to_json(),
            };
            (key.clone(), json)
        })
        .collect();
    Value::Object(fields)
}
