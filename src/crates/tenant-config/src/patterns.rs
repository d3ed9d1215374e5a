//! Hard-coded validation patterns
//!
//! These are compiled once and are deliberately not configurable from the
//! environment.

use regex::Regex;
use std::sync::LazyLock;

/// Loose email shape: `local@domain.tld`, no whitespace
pub static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

/// Workspace slug: lowercase letters, digits and hyphens
pub static WORKSPACE_SLUG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9-]+$").expect("valid slug pattern"));

/// Lowercase DNS name with at least two labels
pub static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-z0-9](?:[a-z0-9-]{0,61}[a-z0-9])?\.)+[a-z0-9][a-z0-9-]{0,61}[a-z0-9]$")
        .expect("valid domain pattern")
});
