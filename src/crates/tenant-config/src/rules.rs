//! Input checks for user and workspace fields
//!
//! Bounds come from `validation.*` in the tree. Lengths count Unicode scalar
//! values.

use crate::error::Result;
use crate::tree::ConfigTree;
use regex::Regex;
use tooling::validation::Validator;

/// Inclusive length range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    pub min: usize,
    pub max: usize,
}

impl LengthBounds {
    fn from_tree(tree: &ConfigTree, prefix: &str) -> Result<Self> {
        Ok(Self {
            min: to_len(tree.require_i64(&format!("{prefix}.minLength"))?),
            max: to_len(tree.require_i64(&format!("{prefix}.maxLength"))?),
        })
    }
}

fn to_len(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

/// Validation rules read from the tree
#[derive(Debug, Clone)]
pub struct InputRules {
    pub user_name: LengthBounds,
    pub workspace_name: LengthBounds,
    pub workspace_slug: LengthBounds,
    pub invite_code_length: usize,
    email: Regex,
    slug: Regex,
    domain: Regex,
}

impl InputRules {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        Ok(Self {
            user_name: LengthBounds::from_tree(tree, "validation.user.name")?,
            workspace_name: LengthBounds::from_tree(tree, "validation.workspace.name")?,
            workspace_slug: LengthBounds::from_tree(tree, "validation.workspace.slug")?,
            invite_code_length: to_len(tree.require_i64("validation.workspace.inviteCode.length")?),
            email: tree.require_pattern("validation.user.email.regex")?.clone(),
            slug: tree.require_pattern("validation.workspace.slug.regex")?.clone(),
            domain: tree.require_pattern("validation.domain.regex")?.clone(),
        })
    }

    pub fn check_user_name<'a>(&self, name: &'a str) -> Result<&'a str> {
        let bounds = self.user_name;
        Ok(Validator::new(name, "name")
            .length_between(bounds.min, bounds.max)
            .validate()?)
    }

    pub fn check_email<'a>(&self, email: &'a str) -> Result<&'a str> {
        Ok(Validator::new(email, "email")
            .not_empty()
            .matches(&self.email)
            .validate()?)
    }

    pub fn check_workspace_name<'a>(&self, name: &'a str) -> Result<&'a str> {
        let bounds = self.workspace_name;
        Ok(Validator::new(name, "workspace name")
            .length_between(bounds.min, bounds.max)
            .validate()?)
    }

    pub fn check_workspace_slug<'a>(&self, slug: &'a str) -> Result<&'a str> {
        let bounds = self.workspace_slug;
        Ok(Validator::new(slug, "workspace slug")
            .length_between(bounds.min, bounds.max)
            .matches(&self.slug)
            .validate()?)
    }

    pub fn check_domain<'a>(&self, domain: &'a str) -> Result<&'a str> {
        Ok(Validator::new(domain, "domain")
            .not_empty()
            .matches(&self.domain)
            .validate()?)
    }

    /// Whether `code` has the configured invite code length
    pub fn is_invite_code(&self, code: &str) -> bool {
        code.chars().count() == self.invite_code_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use tooling::config::MapEnv;
    use tooling::ToolingError;

    fn rules(env: &MapEnv) -> InputRules {
        InputRules::from_tree(&ConfigTree::from_env(env)).unwrap()
    }

    #[test]
    fn test_default_bounds() {
        let rules = rules(&MapEnv::new());
        assert_eq!(rules.user_name, LengthBounds { min: 1, max: 32 });
        assert_eq!(rules.workspace_slug, LengthBounds { min: 1, max: 16 });
        assert_eq!(rules.invite_code_length, 6);
    }

    #[test]
    fn test_workspace_name_length() {
        let rules = rules(&MapEnv::new());
        assert!(rules.check_workspace_name("Acme").is_ok());
        assert!(rules.check_workspace_name("").is_err());
        assert!(rules.check_workspace_name("a workspace name too long").is_err());
        // sixteen scalar values, more bytes
        assert!(rules.check_workspace_name("ééééééééééééééé!").is_ok());
    }

    #[test]
    fn test_configured_bounds_apply() {
        let rules = rules(&MapEnv::new().with("VALIDATION_USER_NAME_MAX", "4"));
        assert!(rules.check_user_name("Jane").is_ok());
        match rules.check_user_name("Janet") {
            Err(ConfigError::Tooling(ToolingError::Validation { field, .. })) => {
                assert_eq!(field, "name");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_slug() {
        let rules = rules(&MapEnv::new());
        assert_eq!(rules.check_workspace_slug("acme-2").unwrap(), "acme-2");
        assert!(rules.check_workspace_slug("Acme").is_err());
        assert!(rules.check_workspace_slug("acme_corp").is_err());
    }

    #[test]
    fn test_email_and_domain() {
        let rules = rules(&MapEnv::new());
        assert!(rules.check_email("user@email.com").is_ok());
        assert!(rules.check_email("user@email").is_err());
        assert!(rules.check_domain("app.mydomain.com").is_ok());
        assert!(rules.check_domain("mydomain").is_err());
    }

    #[test]
    fn test_invite_code() {
        let rules = rules(&MapEnv::new().with("VALIDATION_INVITE_CODE_LENGTH", "8"));
        assert!(rules.is_invite_code("ABCD1234"));
        assert!(!rules.is_invite_code("ABC123"));
    }

    #[test]
    fn test_negative_bound_clamps() {
        let rules = rules(&MapEnv::new().with("VALIDATION_USER_NAME_MIN", "-3"));
        assert_eq!(rules.user_name.min, 0);
        assert!(rules.check_user_name("").is_ok());
    }
}
