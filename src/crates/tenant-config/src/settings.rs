//! Startup bundle of the tree and every typed view over it

use crate::error::Result;
use crate::features::{FeatureFlags, Integrations};
use crate::plans::SubscriptionRules;
use crate::progress_bar::ProgressBarConfig;
use crate::rules::InputRules;
use crate::swr::{ApiPolicy, SwrPolicy};
use crate::template::TemplateInterpolator;
use crate::tree::ConfigTree;
use crate::web::WebSettings;
use tooling::config::{EnvSource, ProcessEnv};
use tracing::info;

/// Everything derived from one configuration tree
///
/// Built once at startup and passed to the components that need it.
#[derive(Debug, Clone)]
pub struct Settings {
    tree: ConfigTree,
    interpolator: TemplateInterpolator,
    subscription: SubscriptionRules,
    swr: SwrPolicy,
    api: ApiPolicy,
    progress_bar: ProgressBarConfig,
    web: WebSettings,
    input_rules: InputRules,
    features: FeatureFlags,
    integrations: Integrations,
}

impl Settings {
    /// Build the tree from `env` and derive every view
    pub fn load<E: EnvSource + ?Sized>(env: &E) -> Result<Self> {
        Self::from_tree(ConfigTree::from_env(env))
    }

    pub fn from_process_env() -> Result<Self> {
        Self::load(&ProcessEnv)
    }

    /// Derive every view from a prebuilt tree
    pub fn from_tree(tree: ConfigTree) -> Result<Self> {
        let settings = Self {
            interpolator: TemplateInterpolator::new(&tree),
            subscription: SubscriptionRules::from_tree(&tree)?,
            swr: SwrPolicy::from_tree(&tree)?,
            api: ApiPolicy::from_tree(&tree)?,
            progress_bar: ProgressBarConfig::from_tree(&tree)?,
            web: WebSettings::from_tree(&tree)?,
            input_rules: InputRules::from_tree(&tree)?,
            features: FeatureFlags::from_tree(&tree)?,
            integrations: Integrations::from_tree(&tree)?,
            tree,
        };

        info!(
            app_name = settings.interpolator.app_name(),
            fingerprint = settings.tree.fingerprint()?,
            disabled_features = settings.features.disabled().count(),
            "configuration loaded"
        );

        Ok(settings)
    }

    pub fn tree(&self) -> &ConfigTree {
        &self.tree
    }

    pub fn interpolator(&self) -> &TemplateInterpolator {
        &self.interpolator
    }

    pub fn subscription(&self) -> &SubscriptionRules {
        &self.subscription
    }

    pub fn swr(&self) -> &SwrPolicy {
        &self.swr
    }

    pub fn api(&self) -> &ApiPolicy {
        &self.api
    }

    pub fn progress_bar(&self) -> &ProgressBarConfig {
        &self.progress_bar
    }

    pub fn web(&self) -> &WebSettings {
        &self.web
    }

    pub fn input_rules(&self) -> &InputRules {
        &self.input_rules
    }

    pub fn features(&self) -> &FeatureFlags {
        &self.features
    }

    pub fn integrations(&self) -> &Integrations {
        &self.integrations
    }
}
