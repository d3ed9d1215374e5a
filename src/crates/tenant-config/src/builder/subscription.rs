//! Per-tier plan tables under `subscription`

use super::Section;
use crate::plans::SubscriptionTier;
use crate::value::ConfigValue;
use tooling::config::{build_env_key, EnvSource};

/// Built-in values for one tier
struct TierDefaults {
    name: &'static str,
    display_name: &'static str,
    /// `None` for a tier whose price is fixed and not read from the environment
    price: Option<f64>,
    interval: &'static str,
    workspaces: i64,
    members: i64,
    custom_domains: i64,
    storage_mb: i64,
    api_calls: i64,
    features: &'static [&'static str],
}

const FREE: TierDefaults = TierDefaults {
    name: "Hobby",
    display_name: "Free Plan",
    price: None,
    interval: "forever",
    workspaces: 1,
    members: 1,
    custom_domains: 1,
    storage_mb: 100,
    api_calls: 1000,
    features: &[
        "1 Workspace",
        "1 Team Member",
        "1 Custom Domain",
        "100 MB Storage",
        "1,000 API calls/month",
        "Community Support",
    ],
};

const STANDARD: TierDefaults = TierDefaults {
    name: "Standard",
    display_name: "Standard Plan",
    price: Some(9.0),
    interval: "per month",
    workspaces: 5,
    members: 5,
    custom_domains: 3,
    storage_mb: 1000,
    api_calls: 10_000,
    features: &[
        "5 Workspaces",
        "5 Team Members per workspace",
        "3 Custom Domains",
        "1 GB Storage",
        "10,000 API calls/month",
        "Priority Email Support",
        "Advanced Analytics",
    ],
};

const PREMIUM: TierDefaults = TierDefaults {
    name: "Premium",
    display_name: "Premium Plan",
    price: Some(29.0),
    interval: "per month",
    workspaces: 10,
    members: 10,
    custom_domains: 5,
    storage_mb: 10_000,
    api_calls: 100_000,
    features: &[
        "10 Workspaces",
        "10 Team Members per workspace",
        "5 Custom Domains",
        "10 GB Storage",
        "100,000 API calls/month",
        "24/7 Priority Support",
        "Advanced Analytics",
        "Custom Integrations",
        "API Access",
    ],
};

fn defaults(tier: SubscriptionTier) -> &'static TierDefaults {
    match tier {
        SubscriptionTier::Free => &FREE,
        SubscriptionTier::Standard => &STANDARD,
        SubscriptionTier::Premium => &PREMIUM,
    }
}

pub(super) fn tiers<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    SubscriptionTier::ALL
        .iter()
        .fold(Section::new(env), |section, &tier| {
            section.value(tier.as_str(), plan(env, tier))
        })
        .finish()
}

fn plan<E: EnvSource + ?Sized>(env: &E, tier: SubscriptionTier) -> ConfigValue {
    let defaults = defaults(tier);
    let prefix = format!("NEXT_PUBLIC_PLAN_{}_", tier.as_str());
    let key = |name: &str| build_env_key(&prefix, name);

    let section = Section::new(env)
        .text("name", &key("name"), defaults.name)
        .text("displayName", &key("display"), defaults.display_name);

    let section = match defaults.price {
        Some(price) => section.float("price", &key("price"), price),
        None => section.value("price", 0_i64),
    };

    section
        .text("interval", &key("interval"), defaults.interval)
        .section("limits", |limits| {
            limits
                .int("workspaces", &key("workspaces"), defaults.workspaces)
                .int("members", &key("members"), defaults.members)
                .int("customDomains", &key("domains"), defaults.custom_domains)
                // megabytes
                .int("storage", &key("storage"), defaults.storage_mb)
                // per month
                .int("apiCalls", &key("api_calls"), defaults.api_calls)
        })
        .strings("features", defaults.features)
        .finish()
}
