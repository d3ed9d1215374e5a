//! Environment to [`ConfigTree`] construction
//!
//! Every field has a canonical variable name, a default and a coercion rule.
//! The builder never fails: absent, empty or malformed values resolve to
//! their defaults. Sections are assembled by the submodules, one per area of
//! the tree.
//!
//! # Example
//!
//! ```rust
//! use tenant_config::ConfigBuilder;
//! use tooling::config::MapEnv;
//!
//! let env = MapEnv::new()
//!     .with("NEXT_PUBLIC_APP_NAME", "Acme")
//!     .with("NEXT_PUBLIC_PLAN_FREE_WORKSPACES", "abc");
//!
//! let tree = ConfigBuilder::new(&env).with_year(2024).build();
//!
//! assert_eq!(tree.get_str("email.subjectPrefix"), Some("[Acme]"));
//! assert_eq!(tree.get_i64("subscription.FREE.limits.workspaces"), Some(1));
//! ```

mod branding;
mod content;
mod platform;
mod section;
mod subscription;

pub(crate) use section::Section;

use crate::tree::ConfigTree;
use chrono::{Datelike, Utc};
use tooling::config::{get_env_or, EnvSource};
use tracing::debug;

/// Application name used when `NEXT_PUBLIC_APP_NAME` is absent or empty
pub const DEFAULT_APP_NAME: &str = "Nextacular";

/// Variable holding the application name
pub const APP_NAME_VAR: &str = "NEXT_PUBLIC_APP_NAME";

/// Builds a [`ConfigTree`] from an environment source
///
/// The current year is the only input not taken from the environment; it is
/// embedded in the default footer copyright and can be pinned with
/// [`with_year`](Self::with_year).
pub struct ConfigBuilder<'e, E: ?Sized> {
    env: &'e E,
    year: i32,
}

impl<'e, E: EnvSource + ?Sized> ConfigBuilder<'e, E> {
    pub fn new(env: &'e E) -> Self {
        Self {
            env,
            year: Utc::now().year(),
        }
    }

    /// Pin the year used in the default copyright line
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Resolve every field and assemble the tree
    pub fn build(&self) -> ConfigTree {
        // derived fields in `email` fall back to this
        let app_name = get_env_or(self.env, APP_NAME_VAR, DEFAULT_APP_NAME);
        debug!(app_name = %app_name, year = self.year, "building configuration tree");

        let ctx = BuildContext {
            app_name: &app_name,
            year: self.year,
        };

        let root = Section::new(self.env)
            .value("app", branding::app(self.env, &ctx))
            .value("seo", branding::seo(self.env))
            .value("assets", branding::assets(self.env))
            .value("theme", branding::theme(self.env))
            .value("subscription", subscription::tiers(self.env))
            .value("validation", platform::validation(self.env))
            .value("ui", platform::ui(self.env))
            .value("api", platform::api(self.env))
            .value("email", content::email(self.env, &ctx))
            .value("sitemap", content::sitemap(self.env))
            .value("placeholders", content::placeholders(self.env))
            .value("landing", content::landing(self.env, &ctx))
            .value("messages", content::messages())
            .value("features", platform::features(self.env))
            .value("integrations", platform::integrations(self.env))
            .into_record();

        ConfigTree::from_record(root)
    }
}

/// Build a tree from `env` with the current year
pub fn build<E: EnvSource + ?Sized>(env: &E) -> ConfigTree {
    ConfigBuilder::new(env).build()
}

/// Values resolved before the sections that derive from them
pub(crate) struct BuildContext<'a> {
    pub(crate) app_name: &'a str,
    pub(crate) year: i32,
}
