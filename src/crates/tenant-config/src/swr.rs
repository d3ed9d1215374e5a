//! Client-side data fetching policy
//!
//! The tree supplies the numeric and boolean policy; the fetch function is
//! supplied by the caller. Unlike the rest of the crate this boundary is
//! fail-loud: every fetch failure becomes a [`FetchError`].

use crate::error::Result;
use crate::tree::ConfigTree;
use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;
use tooling::logging::sanitize_for_logging;
use tracing::warn;

/// A failed data fetch, carrying the underlying failure's description
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error: {0}")]
pub struct FetchError(String);

impl FetchError {
    /// Description of the underlying failure, without the `Error:` prefix
    pub fn description(&self) -> &str {
        &self.0
    }
}

/// Convert any fetch failure into a [`FetchError`]
pub fn on_error<E: Display>(err: E) -> FetchError {
    let description = err.to_string();
    warn!(error = %sanitize_for_logging(&description), "data fetch failed");
    FetchError(description)
}

/// Revalidation settings read from `api.swr`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwrPolicy {
    pub refresh_interval: Duration,
    pub deduping_interval: Duration,
    pub revalidate_on_focus: bool,
    pub revalidate_on_reconnect: bool,
}

impl SwrPolicy {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        Ok(Self {
            refresh_interval: millis(tree, "api.swr.refreshInterval")?,
            deduping_interval: millis(tree, "api.swr.dedupingInterval")?,
            revalidate_on_focus: tree.require_bool("api.swr.revalidateOnFocus")?,
            revalidate_on_reconnect: tree.require_bool("api.swr.revalidateOnReconnect")?,
        })
    }
}

/// Timeout and retry settings for outbound API calls, read from `api`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiPolicy {
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
}

impl ApiPolicy {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        let attempts = tree.require_i64("api.retryAttempts")?;
        let retry_attempts = u32::try_from(attempts.max(0)).unwrap_or(u32::MAX);
        if attempts < 0 {
            warn!(attempts, "negative retry count, using zero");
        }

        Ok(Self {
            timeout: millis(tree, "api.timeout")?,
            retry_attempts,
            retry_delay: millis(tree, "api.retryDelay")?,
        })
    }
}

/// Millisecond integer at `path`; negative values clamp to zero
fn millis(tree: &ConfigTree, path: &str) -> Result<Duration> {
    let ms = tree.require_i64(path)?;
    let ms = u64::try_from(ms).unwrap_or_else(|_| {
        warn!(path, ms, "negative interval, using zero");
        0
    });
    Ok(Duration::from_millis(ms))
}

/// Loads the data stored under a key
pub trait Fetcher<T> {
    type Error: Display;

    fn fetch(&self, key: &str) -> std::result::Result<T, Self::Error>;
}

impl<T, E, F> Fetcher<T> for F
where
    F: Fn(&str) -> std::result::Result<T, E>,
    E: Display,
{
    type Error = E;

    fn fetch(&self, key: &str) -> std::result::Result<T, E> {
        self(key)
    }
}

/// A policy paired with the fetcher it governs
#[derive(Debug, Clone)]
pub struct SwrConfig<F> {
    policy: SwrPolicy,
    fetcher: F,
}

impl<F> SwrConfig<F> {
    pub fn new(policy: SwrPolicy, fetcher: F) -> Self {
        Self { policy, fetcher }
    }

    pub fn policy(&self) -> &SwrPolicy {
        &self.policy
    }

    /// Fetch `key`, routing any failure through [`on_error`]
    pub fn fetch<T>(&self, key: &str) -> std::result::Result<T, FetchError>
    where
        F: Fetcher<T>,
    {
        self.fetcher.fetch(key).map_err(on_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tooling::config::MapEnv;

    fn tree(env: &MapEnv) -> ConfigTree {
        ConfigTree::from_env(env)
    }

    #[test]
    fn test_default_policy() {
        let policy = SwrPolicy::from_tree(&tree(&MapEnv::new())).unwrap();
        assert_eq!(
            policy,
            SwrPolicy {
                refresh_interval: Duration::from_secs(1),
                deduping_interval: Duration::from_secs(2),
                revalidate_on_focus: true,
                revalidate_on_reconnect: true,
            }
        );
    }

    #[test]
    fn test_negative_interval_clamps() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_SWR_REFRESH_INTERVAL", "-5")
            .with("NEXT_PUBLIC_SWR_REVALIDATE_FOCUS", "false");
        let policy = SwrPolicy::from_tree(&tree(&env)).unwrap();
        assert_eq!(policy.refresh_interval, Duration::ZERO);
        assert!(!policy.revalidate_on_focus);
    }

    #[test]
    fn test_api_policy() {
        let env = MapEnv::new()
            .with("API_TIMEOUT", "5000")
            .with("API_RETRY_ATTEMPTS", "-1");
        let policy = ApiPolicy::from_tree(&tree(&env)).unwrap();
        assert_eq!(policy.timeout, Duration::from_secs(5));
        assert_eq!(policy.retry_attempts, 0);
        assert_eq!(policy.retry_delay, Duration::from_secs(1));

        let defaults = ApiPolicy::from_tree(&tree(&MapEnv::new())).unwrap();
        assert_eq!(defaults.retry_attempts, 3);
        assert_eq!(defaults.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_on_error_prefixes_description() {
        let err = on_error("connection refused");
        assert_eq!(err.to_string(), "Error: connection refused");
        assert_eq!(err.description(), "connection refused");
    }

    #[test]
    fn test_fetch_routes_failures() {
        let policy = SwrPolicy::from_tree(&tree(&MapEnv::new())).unwrap();
        let config = SwrConfig::new(policy, |key: &str| {
            if key == "/api/workspaces" {
                Ok(vec!["acme".to_string()])
            } else {
                Err(format!("404 for {key}"))
            }
        });

        assert_eq!(
            config.fetch::<Vec<String>>("/api/workspaces"),
            Ok(vec!["acme".to_string()])
        );
        let err = config.fetch::<Vec<String>>("/api/missing").unwrap_err();
        assert_eq!(err.to_string(), "Error: 404 for /api/missing");
        assert!(config.policy().revalidate_on_reconnect);
    }
}
