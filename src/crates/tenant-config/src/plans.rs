//! Subscription tiers and their limits
//!
//! Tier identifiers match the data layer's subscription enum exactly
//! (`FREE`, `STANDARD`, `PREMIUM`), and the limits table is keyed by them.

use crate::error::{ConfigError, Result};
use crate::tree::ConfigTree;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Subscription tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SubscriptionTier {
    Free,
    Standard,
    Premium,
}

impl SubscriptionTier {
    /// All tiers, cheapest first
    pub const ALL: [SubscriptionTier; 3] = [Self::Free, Self::Standard, Self::Premium];

    /// Identifier shared with the data layer
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "FREE",
            Self::Standard => "STANDARD",
            Self::Premium => "PREMIUM",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SubscriptionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubscriptionTier {
    type Err = ConfigError;

    /// Exact, case-sensitive match on the identifier
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str() == s)
            .ok_or_else(|| ConfigError::UnknownTier(s.to_string()))
    }
}

/// Usage limits of one tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanLimits {
    pub workspaces: i64,
    /// Members per workspace
    pub members: i64,
    pub custom_domains: i64,
    #[serde(rename = "storage")]
    pub storage_mb: i64,
    /// Calls per month
    pub api_calls: i64,
}

impl PlanLimits {
    fn from_tree(tree: &ConfigTree, tier: SubscriptionTier) -> Result<Self> {
        let limit = |field: &str| tree.require_i64(&format!("subscription.{tier}.limits.{field}"));

        Ok(Self {
            workspaces: limit("workspaces")?,
            members: limit("members")?,
            custom_domains: limit("customDomains")?,
            storage_mb: limit("storage")?,
            api_calls: limit("apiCalls")?,
        })
    }
}

/// Display and billing data of one tier
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub tier: SubscriptionTier,
    pub name: String,
    pub display_name: String,
    pub price: f64,
    pub interval: String,
    pub limits: PlanLimits,
    pub features: Vec<String>,
}

impl Plan {
    fn from_tree(tree: &ConfigTree, tier: SubscriptionTier) -> Result<Self> {
        let path = |field: &str| format!("subscription.{tier}.{field}");

        Ok(Self {
            tier,
            name: tree.require_str(&path("name"))?.to_string(),
            display_name: tree.require_str(&path("displayName"))?.to_string(),
            price: tree.require_f64(&path("price"))?,
            interval: tree.require_str(&path("interval"))?.to_string(),
            limits: PlanLimits::from_tree(tree, tier)?,
            features: tree.require_strings(&path("features"))?,
        })
    }
}

/// Plans for every tier
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionRules {
    plans: Vec<Plan>,
}

impl SubscriptionRules {
    /// Read `subscription.<TIER>` for every tier
    ///
    /// Fails only if the tree lacks one of the plan fields or holds one with
    /// the wrong kind.
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        let plans = SubscriptionTier::ALL
            .into_iter()
            .map(|tier| Plan::from_tree(tree, tier))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { plans })
    }

    pub fn plan(&self, tier: SubscriptionTier) -> &Plan {
        &self.plans[tier.index()]
    }

    pub fn limits(&self, tier: SubscriptionTier) -> &PlanLimits {
        &self.plan(tier).limits
    }

    /// Plans cheapest first
    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Record;
    use tooling::config::MapEnv;

    #[test]
    fn test_tier_identifiers() {
        assert_eq!("FREE".parse::<SubscriptionTier>().unwrap(), SubscriptionTier::Free);
        assert_eq!(SubscriptionTier::Premium.to_string(), "PREMIUM");
        assert!(matches!(
            "free".parse::<SubscriptionTier>(),
            Err(ConfigError::UnknownTier(s)) if s == "free"
        ));
        assert!("ENTERPRISE".parse::<SubscriptionTier>().is_err());
    }

    #[test]
    fn test_tier_serde() {
        assert_eq!(
            serde_json::to_string(&SubscriptionTier::Standard).unwrap(),
            "\"STANDARD\""
        );
        let tier: SubscriptionTier = serde_json::from_str("\"PREMIUM\"").unwrap();
        assert_eq!(tier, SubscriptionTier::Premium);
    }

    #[test]
    fn test_rules_from_default_tree() {
        let tree = ConfigTree::from_env(&MapEnv::new());
        let rules = SubscriptionRules::from_tree(&tree).unwrap();

        assert_eq!(
            *rules.limits(SubscriptionTier::Free),
            PlanLimits {
                workspaces: 1,
                members: 1,
                custom_domains: 1,
                storage_mb: 100,
                api_calls: 1000,
            }
        );
        assert_eq!(rules.limits(SubscriptionTier::Premium).custom_domains, 5);
        assert_eq!(rules.plan(SubscriptionTier::Standard).price, 9.0);
        assert_eq!(rules.plan(SubscriptionTier::Free).name, "Hobby");

        let tiers: Vec<_> = rules.iter().map(|plan| plan.tier).collect();
        assert_eq!(tiers, SubscriptionTier::ALL);
    }

    #[test]
    fn test_rules_follow_environment() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_PLAN_STANDARD_DOMAINS", "7")
            .with("NEXT_PUBLIC_PLAN_FREE_WORKSPACES", "abc");
        let rules = SubscriptionRules::from_tree(&ConfigTree::from_env(&env)).unwrap();
        assert_eq!(rules.limits(SubscriptionTier::Standard).custom_domains, 7);
        assert_eq!(rules.limits(SubscriptionTier::Free).workspaces, 1);
    }

    #[test]
    fn test_limits_serialize_with_tree_names() {
        let tree = ConfigTree::from_env(&MapEnv::new());
        let rules = SubscriptionRules::from_tree(&tree).unwrap();
        let json = serde_json::to_value(rules.limits(SubscriptionTier::Free)).unwrap();
        assert_eq!(json, tree.to_json()["subscription"]["FREE"]["limits"]);
    }

    #[test]
    fn test_rules_from_incomplete_tree() {
        let tree = ConfigTree::from_record(Record::new());
        assert!(matches!(
            SubscriptionRules::from_tree(&tree),
            Err(ConfigError::Missing { path }) if path == "subscription.FREE.name"
        ));
    }
}
