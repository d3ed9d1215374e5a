//! Feature flags
//!
//! Every flag is on unless its variable is exactly `"false"`.

use crate::error::Result;
use crate::tree::ConfigTree;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureFlag {
    Billing,
    CustomDomains,
    Analytics,
    Invitations,
    Workspaces,
    DarkMode,
    I18n,
    Signup,
}

impl FeatureFlag {
    pub const ALL: [FeatureFlag; 8] = [
        Self::Billing,
        Self::CustomDomains,
        Self::Analytics,
        Self::Invitations,
        Self::Workspaces,
        Self::DarkMode,
        Self::I18n,
        Self::Signup,
    ];

    /// Field name under `features`
    pub fn field(self) -> &'static str {
        match self {
            Self::Billing => "enableBilling",
            Self::CustomDomains => "enableCustomDomains",
            Self::Analytics => "enableAnalytics",
            Self::Invitations => "enableInvitations",
            Self::Workspaces => "enableWorkspaces",
            Self::DarkMode => "enableDarkMode",
            Self::I18n => "enableI18n",
            Self::Signup => "enableSignup",
        }
    }

    /// Variable that disables the flag when set to `"false"`
    pub fn env_var(self) -> &'static str {
        match self {
            Self::Billing => "NEXT_PUBLIC_ENABLE_BILLING",
            Self::CustomDomains => "NEXT_PUBLIC_ENABLE_CUSTOM_DOMAINS",
            Self::Analytics => "NEXT_PUBLIC_ENABLE_ANALYTICS",
            Self::Invitations => "NEXT_PUBLIC_ENABLE_INVITATIONS",
            Self::Workspaces => "NEXT_PUBLIC_ENABLE_WORKSPACES",
            Self::DarkMode => "NEXT_PUBLIC_ENABLE_DARK_MODE",
            Self::I18n => "NEXT_PUBLIC_ENABLE_I18N",
            Self::Signup => "NEXT_PUBLIC_ENABLE_SIGNUP",
        }
    }

    /// Dotted path in the tree
    pub fn path(self) -> String {
        format!("features.{}", self.field())
    }
}

impl fmt::Display for FeatureFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field())
    }
}

/// Resolved state of every flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: [bool; FeatureFlag::ALL.len()],
}

impl FeatureFlags {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        let mut enabled = [true; FeatureFlag::ALL.len()];
        for (slot, flag) in enabled.iter_mut().zip(FeatureFlag::ALL) {
            *slot = tree.require_bool(&flag.path())?;
        }
        Ok(Self { enabled })
    }

    pub fn is_enabled(&self, flag: FeatureFlag) -> bool {
        self.enabled[flag as usize]
    }

    /// Flags turned off, in declaration order
    pub fn disabled(&self) -> impl Iterator<Item = FeatureFlag> + '_ {
        FeatureFlag::ALL
            .into_iter()
            .filter(|flag| !self.is_enabled(*flag))
    }
}

/// Optional third-party integrations, detected from their credentials
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Integrations {
    pub analytics_tracking_id: Option<String>,
    pub stripe_publishable_key: Option<String>,
    pub vercel_ip_address: String,
    pub vercel_api_url: String,
}

impl Integrations {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        Ok(Self {
            analytics_tracking_id: credential(
                tree,
                "integrations.googleAnalytics.enabled",
                "integrations.googleAnalytics.trackingId",
            )?,
            stripe_publishable_key: credential(
                tree,
                "integrations.stripe.enabled",
                "integrations.stripe.publishableKey",
            )?,
            vercel_ip_address: tree.require_str("integrations.vercel.ipAddress")?.to_string(),
            vercel_api_url: tree.require_str("integrations.vercel.apiUrl")?.to_string(),
        })
    }
}

fn credential(tree: &ConfigTree, enabled: &str, value: &str) -> Result<Option<String>> {
    if tree.require_bool(enabled)? {
        Ok(Some(tree.require_str(value)?.to_string()))
    } else {
        Ok(None)
    }
}
