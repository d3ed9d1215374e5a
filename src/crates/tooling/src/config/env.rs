//! Environment variable coercion helpers
//!
//! Every helper is fail-soft: a missing, empty or malformed value resolves to
//! the supplied default and is never reported as an error.

use super::source::EnvSource;
use tracing::debug;

/// Load a raw environment variable
///
/// # Returns
///
/// * `Some(value)` if the variable exists, even when it is empty
/// * `None` if it does not exist
pub fn get_env<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key)
}

/// Load an environment variable, treating an empty value as absent
pub fn get_env_non_empty<E: EnvSource + ?Sized>(env: &E, key: &str) -> Option<String> {
    env.var(key).filter(|val| !val.is_empty())
}

/// Return the first non-empty value among `keys`, in order
///
/// # Example
///
/// ```rust
/// use tooling::config::{get_env_first, MapEnv};
///
/// let env = MapEnv::new().with("PUBLIC_URL", "").with("URL", "https://acme.io");
/// assert_eq!(get_env_first(&env, &["PUBLIC_URL", "URL"]).as_deref(), Some("https://acme.io"));
/// ```
pub fn get_env_first<E: EnvSource + ?Sized>(env: &E, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| get_env_non_empty(env, key))
}

/// Load a string variable with a default value
///
/// The raw value is used verbatim if present and non-empty.
pub fn get_env_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: impl Into<String>) -> String {
    get_env_non_empty(env, key).unwrap_or_else(|| default.into())
}

/// Load an integer variable, or use a default value
///
/// Reads the leading base-10 integer after any leading whitespace, with an
/// optional sign, and ignores whatever follows it: `"2.5"` reads as `2` and
/// `"500MB"` as `500`. A value with no leading digits is logged at debug
/// level and replaced by `default`. Values past the `i64` range saturate.
///
/// ```rust
/// use tooling::config::{get_env_int_or, MapEnv};
///
/// let env = MapEnv::new().with("STORAGE", "500MB").with("SEATS", "many");
/// assert_eq!(get_env_int_or(&env, "STORAGE", 100), 500);
/// assert_eq!(get_env_int_or(&env, "SEATS", 1), 1);
/// ```
pub fn get_env_int_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: i64) -> i64 {
    let Some(raw) = get_env_non_empty(env, key) else {
        return default;
    };

    let Some(number) = int_prefix(&raw) else {
        debug!(key, default, "malformed environment value, using default");
        return default;
    };
    note_ignored_tail(key, &raw, number);

    number.parse().unwrap_or_else(|_| {
        if number.starts_with('-') {
            i64::MIN
        } else {
            i64::MAX
        }
    })
}

/// Load a decimal variable, or use a default value
///
/// Reads the longest leading decimal literal (sign, digits, fraction and
/// exponent), so `"19.99USD"` reads as `19.99`. No leading number, or a
/// non-finite result such as `"NaN"` or `"1e999"`, falls back to `default`.
pub fn get_env_f64_or<E: EnvSource + ?Sized>(env: &E, key: &str, default: f64) -> f64 {
    let Some(raw) = get_env_non_empty(env, key) else {
        return default;
    };

    let parsed = float_prefix(&raw).and_then(|number| {
        note_ignored_tail(key, &raw, number);
        number.parse::<f64>().ok()
    });

    match parsed {
        Some(value) if value.is_finite() => value,
        _ => {
            debug!(key, default, "malformed environment value, using default");
            default
        }
    }
}

fn note_ignored_tail(key: &str, raw: &str, number: &str) {
    let consumed = raw.trim_start();
    if consumed.len() > number.len() {
        debug!(key, ignored = &consumed[number.len()..], "trailing characters after number");
    }
}

fn digits_at(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Optional sign and leading digits, after leading whitespace
fn int_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let sign = usize::from(s.starts_with(&['+', '-'][..]));
    let digits = digits_at(s.as_bytes(), sign);
    (digits > 0).then(|| &s[..sign + digits])
}

/// Longest leading `[sign] digits [. digits] [e [sign] digits]` literal
fn float_prefix(raw: &str) -> Option<&str> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(s.starts_with(&['+', '-'][..]));
    let whole = digits_at(bytes, end);
    end += whole;

    let mut fraction = 0;
    if bytes.get(end) == Some(&b'.') {
        fraction = digits_at(bytes, end + 1);
        if fraction > 0 {
            end += 1 + fraction;
        }
    }
    if whole + fraction == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_at(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }

    Some(&s[..end])
}

/// Load an enabled-unless-disabled flag
///
/// The flag is `false` only when the variable is present and exactly equals
/// `"false"`. Anything else, including `"0"`, `"no"`, `"FALSE"` and the empty
/// string, leaves it enabled.
pub fn get_env_enabled<E: EnvSource + ?Sized>(env: &E, key: &str) -> bool {
    env.var(key).as_deref() != Some("false")
}

/// Load a presence flag
///
/// `true` iff the variable is set to a non-empty string. Used to detect
/// optional integrations from their credentials.
pub fn get_env_present<E: EnvSource + ?Sized>(env: &E, key: &str) -> bool {
    get_env_non_empty(env, key).is_some()
}

/// Build a prefixed environment variable name
///
/// # Example
///
/// ```rust
/// use tooling::config::build_env_key;
///
/// assert_eq!(build_env_key("PLAN_FREE_", "api_calls"), "PLAN_FREE_API_CALLS");
/// ```
pub fn build_env_key(prefix: &str, name: &str) -> String {
    format!("{}{}", prefix, name.to_uppercase())
}
