//! Tenant configuration for a multi-tenant SaaS application
//!
//! The environment is read once into an immutable [`ConfigTree`]. Lookups go
//! through dotted paths, and message templates are filled in by the
//! [`TemplateInterpolator`]. Typed views over the tree (plans, cache policy,
//! web settings, input rules, feature flags) are bundled by [`Settings`].
//!
//! Resolution is fail-soft: a missing or malformed variable resolves to its
//! default, and a missing path resolves to `None`. The only fail-loud
//! boundary is [`swr::on_error`].
//!
//! # Example
//!
//! ```rust
//! use tenant_config::{Placeholders, Settings, SubscriptionTier};
//! use tooling::config::MapEnv;
//!
//! let env = MapEnv::new()
//!     .with("NEXT_PUBLIC_APP_NAME", "Acme")
//!     .with("NEXT_PUBLIC_PLAN_FREE_WORKSPACES", "2");
//!
//! let settings = Settings::load(&env)?;
//!
//! assert_eq!(settings.subscription().limits(SubscriptionTier::Free).workspaces, 2);
//! assert_eq!(
//!     settings.interpolator().render("email.templates.signin.subject", &Placeholders::new())?,
//!     "Sign in to Acme"
//! );
//! # Ok::<(), tenant_config::ConfigError>(())
//! ```

pub mod builder;
pub mod error;
pub mod features;
pub mod patterns;
pub mod plans;
pub mod progress_bar;
pub mod rules;
pub mod settings;
pub mod swr;
pub mod template;
pub mod tree;
pub mod value;
pub mod web;

pub use builder::{ConfigBuilder, DEFAULT_APP_NAME};
pub use error::{ConfigError, Result};
pub use features::{FeatureFlag, FeatureFlags, Integrations};
pub use plans::{Plan, PlanLimits, SubscriptionRules, SubscriptionTier};
pub use progress_bar::ProgressBarConfig;
pub use rules::{InputRules, LengthBounds};
pub use settings::Settings;
pub use swr::{ApiPolicy, FetchError, Fetcher, SwrConfig, SwrPolicy};
pub use template::{Placeholders, ReservedToken, TemplateInterpolator};
pub use tree::ConfigTree;
pub use value::{ConfigValue, Record};
pub use web::WebSettings;
