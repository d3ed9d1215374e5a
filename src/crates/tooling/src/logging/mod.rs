//! Tracing setup and secret redaction
//!
//! Configuration dumps and fetch errors can carry publishable keys, tracking
//! ids or bearer tokens. Anything that reaches a log line goes through
//! [`sanitize_for_logging`] first.

use crate::{Result, ToolingError};
use regex::Regex;
use std::sync::LazyLock;

const REDACTED: &str = "[REDACTED]";

/// Pattern and replacement pairs, applied in order
static SECRET_PATTERNS: LazyLock<Vec<(Regex, String)>> = LazyLock::new(|| {
    [
        // `api_key=...`, `secret: ...`, `password=...`
        (
            r"(?i)\b(api[_-]?key|secret|password|passwd|token)(\s*[:=]\s*)\S+",
            format!("${{1}}${{2}}{REDACTED}"),
        ),
        (
            r"(?i)\b(authorization:\s*bearer\s+)\S+",
            format!("${{1}}{REDACTED}"),
        ),
        // credentials in a request URL
        (
            r"(?i)([?&](?:key|token|access_token|api_key)=)[^&\s]+",
            format!("${{1}}{REDACTED}"),
        ),
        // payment provider keys keep their mode prefix
        (
            r"\b(pk|sk|rk)_(live|test)_[A-Za-z0-9]+",
            format!("${{1}}_${{2}}_{REDACTED}"),
        ),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("hard-coded redaction pattern");
        (re, replacement)
    })
    .collect()
});

static SENSITIVE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(key|secret|token|password|passwd|trackingid)$")
        .expect("hard-coded sensitive key pattern")
});

/// Install the global fmt subscriber
///
/// `RUST_LOG` wins over `default_filter` (e.g. `"tenant_config=debug"`).
/// Fails with [`ToolingError::Logging`] when a subscriber is already
/// installed.
pub fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| ToolingError::Logging(e.to_string()))
}

/// Whether a field name looks like it holds a credential
///
/// Case-insensitive match on the end of the name.
///
/// ```rust
/// use tooling::logging::is_sensitive_key;
///
/// assert!(is_sensitive_key("publishableKey"));
/// assert!(!is_sensitive_key("ipAddress"));
/// ```
pub fn is_sensitive_key(key: &str) -> bool {
    SENSITIVE_KEY.is_match(key)
}

/// Mask credentials embedded in free text
///
/// ```rust
/// use tooling::logging::sanitize_for_logging;
///
/// let line = sanitize_for_logging("GET /api/usage?key=abc123&page=2 failed");
/// assert_eq!(line, "GET /api/usage?key=[REDACTED]&page=2 failed");
/// ```
pub fn sanitize_for_logging(input: &str) -> String {
    SECRET_PATTERNS
        .iter()
        .fold(input.to_string(), |text, (re, replacement)| {
            re.replace_all(&text, replacement.as_str()).into_owned()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_style_secrets() {
        assert_eq!(
            sanitize_for_logging("api_key=live123 region=eu"),
            "api_key=[REDACTED] region=eu"
        );
        assert_eq!(
            sanitize_for_logging("EMAIL password: hunter2"),
            "EMAIL password: [REDACTED]"
        );
    }

    #[test]
    fn test_bearer_header() {
        let line = sanitize_for_logging("401 with Authorization: Bearer eyJhbGciOi.x.y");
        assert_eq!(line, "401 with Authorization: Bearer [REDACTED]");
    }

    #[test]
    fn test_query_string_credentials() {
        let line = sanitize_for_logging("fetch https://api.acme.io/v1?access_token=t0k&x=1");
        assert_eq!(line, "fetch https://api.acme.io/v1?access_token=[REDACTED]&x=1");
    }

    #[test]
    fn test_payment_keys_keep_mode() {
        assert_eq!(
            sanitize_for_logging("checkout failed for pk_live_51Habc"),
            "checkout failed for pk_live_[REDACTED]"
        );
        assert_eq!(
            sanitize_for_logging("sk_test_9x"),
            "sk_test_[REDACTED]"
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let input = "Workspace acme created by user@email.com";
        assert_eq!(sanitize_for_logging(input), input);
    }

    #[test]
    fn test_is_sensitive_key() {
        assert!(is_sensitive_key("publishableKey"));
        assert!(is_sensitive_key("trackingId"));
        assert!(is_sensitive_key("API_SECRET"));
        assert!(!is_sensitive_key("name"));
        assert!(!is_sensitive_key("keywords"));
        assert!(!is_sensitive_key("apiUrl"));
    }

    #[test]
    fn test_init_tracing_only_once() {
        let _ = init_tracing("debug");
        let second = init_tracing("debug");
        assert!(matches!(second, Err(ToolingError::Logging(_))));
    }
}
