//! Sources of raw environment variables

use std::collections::HashMap;
use std::env;
use tracing::warn;

/// A read-only mapping from variable name to raw string value
///
/// Implementations never write back to the underlying store.
pub trait EnvSource {
    /// Look up a raw value. `None` means the variable is absent.
    fn var(&self, key: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Reads variables from the process environment
///
/// Variables holding invalid UTF-8 are treated as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(val) => Some(val),
            Err(env::VarError::NotPresent) => None,
            Err(env::VarError::NotUnicode(_)) => {
                warn!(key, "environment variable is not valid UTF-8, ignoring it");
                None
            }
        }
    }
}

/// In-memory environment, mostly useful for tests and embedding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, returning self for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a variable in place
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.vars.remove(key)
    }

    /// Number of variables set
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for MapEnv {
    fn from(vars: HashMap<String, String>) -> Self {
        Self { vars }
    }
}
