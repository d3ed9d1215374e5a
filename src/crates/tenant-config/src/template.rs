//! Placeholder substitution for message and email templates
//!
//! Templates carry tokens written as `{name}`. Each token is resolved in this
//! order:
//!
//! 1. the caller's override for `name`, if the key is present
//! 2. for the reserved tokens, a built-in default (`appName` is the resolved
//!    application name, `email` and `workspaceName` are empty)
//! 3. otherwise the token is left in place as literal text
//!
//! Substitution is a single left-to-right pass. Substituted text is never
//! rescanned, so an override containing `{appName}` is emitted verbatim.
//!
//! # Example
//!
//! ```rust
//! use tenant_config::{ConfigTree, Placeholders, TemplateInterpolator};
//! use tooling::config::MapEnv;
//!
//! let tree = ConfigTree::from_env(&MapEnv::new());
//! let interpolator = TemplateInterpolator::new(&tree);
//!
//! let text = interpolator.interpolate(
//!     "Hi {appName}, welcome to {workspaceName}",
//!     &Placeholders::new().with("workspaceName", "Acme"),
//! );
//! assert_eq!(text, "Hi Nextacular, welcome to Acme");
//! ```

use crate::error::Result;
use crate::tree::ConfigTree;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;
use tracing::{trace, warn};

/// `{` + anything but braces + `}`
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?P<name>[^{}]*)\}").expect("valid token pattern"));

const BRACES: &[char] = &['{', '}'];

/// Path of the application name in the tree
const APP_NAME_PATH: &str = "app.name";

/// Token names with built-in defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservedToken {
    AppName,
    Email,
    WorkspaceName,
}

impl ReservedToken {
    pub const ALL: [ReservedToken; 3] = [Self::AppName, Self::Email, Self::WorkspaceName];

    /// Name as written between the braces
    pub fn name(self) -> &'static str {
        match self {
            Self::AppName => "appName",
            Self::Email => "email",
            Self::WorkspaceName => "workspaceName",
        }
    }

    /// Case-sensitive lookup by token name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|token| token.name() == name)
    }
}

impl fmt::Display for ReservedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.name())
    }
}

/// Caller-supplied token values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placeholders {
    values: HashMap<String, String>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Override keys, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Placeholders {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Placeholders {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

/// Substitutes placeholder tokens using a snapshot of the tree
///
/// Holds a clone of the tree, so it can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct TemplateInterpolator {
    tree: ConfigTree,
    app_name: String,
}

impl TemplateInterpolator {
    pub fn new(tree: &ConfigTree) -> Self {
        let app_name = tree.get_str(APP_NAME_PATH).unwrap_or_default().to_string();
        Self {
            tree: tree.clone(),
            app_name,
        }
    }

    /// Default for `{appName}`
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Replace every recognized token in `template`
    ///
    /// Borrows the input when nothing was substituted. An empty template is
    /// returned unchanged.
    pub fn interpolate<'t>(&self, template: &'t str, overrides: &Placeholders) -> Cow<'t, str> {
        if template.is_empty() {
            return Cow::Borrowed(template);
        }

        let pattern = token_pattern(overrides);
        pattern.replace_all(template, |caps: &Captures<'_>| {
            let name = caps
                .name("key")
                .or_else(|| caps.name("name"))
                .map_or("", |m| m.as_str());
            match self.resolve_token(name, overrides) {
                Some(value) => value.to_string(),
                None => {
                    trace!(token = name, "leaving unknown placeholder");
                    caps[0].to_string()
                }
            }
        })
    }

    /// [`interpolate`](Self::interpolate), with absent input mapped to absent output
    pub fn interpolate_opt<'t>(
        &self,
        template: Option<&'t str>,
        overrides: &Placeholders,
    ) -> Option<Cow<'t, str>> {
        template.map(|t| self.interpolate(t, overrides))
    }

    /// Interpolate the string stored at `path` in the tree
    pub fn render(&self, path: &str, overrides: &Placeholders) -> Result<String> {
        let template = self.tree.require_str(path)?;
        Ok(self.interpolate(template, overrides).into_owned())
    }

    fn resolve_token<'a>(&'a self, name: &str, overrides: &'a Placeholders) -> Option<&'a str> {
        if let Some(value) = overrides.get(name) {
            return Some(value);
        }

        match ReservedToken::from_name(name)? {
            ReservedToken::AppName => Some(self.app_name.as_str()),
            ReservedToken::Email | ReservedToken::WorkspaceName => Some(""),
        }
    }
}

/// Token pattern for one call
///
/// Override keys containing a brace cannot match `[^{}]*`, so they are tried
/// first as literal alternatives, longest first. The scan stays a single pass.
fn token_pattern(overrides: &Placeholders) -> Cow<'static, Regex> {
    let mut braced: Vec<&str> = overrides.keys().filter(|key| key.contains(BRACES)).collect();
    if braced.is_empty() {
        return Cow::Borrowed(&*TOKEN);
    }
    braced.sort_by_key(|key| std::cmp::Reverse(key.len()));

    let literals = braced
        .iter()
        .map(|key| regex::escape(key))
        .collect::<Vec<_>>()
        .join("|");
    match Regex::new(&format!(r"\{{(?:(?P<key>{literals})|(?P<name>[^{{}}]*))\}}")) {
        Ok(re) => Cow::Owned(re),
        Err(e) => {
            warn!(error = %e, "override keys with braces will not match");
            Cow::Borrowed(&*TOKEN)
        }
    }
}
