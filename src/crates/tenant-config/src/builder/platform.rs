//! `validation`, `ui`, `api`, `features` and `integrations`

use super::Section;
use crate::features::FeatureFlag;
use crate::patterns::{DOMAIN, EMAIL, WORKSPACE_SLUG};
use crate::value::ConfigValue;
use tooling::config::{get_env_or, EnvSource};

pub(super) fn validation<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .section("user", |user| {
            user.section("name", |name| {
                name.int("minLength", "VALIDATION_USER_NAME_MIN", 1)
                    .int("maxLength", "VALIDATION_USER_NAME_MAX", 32)
            })
            .section("email", |email| email.value("regex", EMAIL.clone()))
        })
        .section("workspace", |workspace| {
            workspace
                .section("name", |name| {
                    name.int("minLength", "VALIDATION_WORKSPACE_NAME_MIN", 1)
                        .int("maxLength", "VALIDATION_WORKSPACE_NAME_MAX", 16)
                })
                .section("slug", |slug| {
                    slug.int("minLength", "VALIDATION_WORKSPACE_SLUG_MIN", 1)
                        .int("maxLength", "VALIDATION_WORKSPACE_SLUG_MAX", 16)
                        .value("regex", WORKSPACE_SLUG.clone())
                })
                .section("inviteCode", |code| {
                    code.int("length", "VALIDATION_INVITE_CODE_LENGTH", 6)
                })
        })
        .section("domain", |domain| domain.value("regex", DOMAIN.clone()))
        .finish()
}

/// Durations are in milliseconds
pub(super) fn ui<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .section("toast", |toast| {
            toast
                .int("duration", "NEXT_PUBLIC_TOAST_DURATION", 10_000)
                .int("loginDuration", "NEXT_PUBLIC_TOAST_LOGIN_DURATION", 5000)
                .text("position", "NEXT_PUBLIC_TOAST_POSITION", "bottom-left")
        })
        .int("signoutDelay", "SIGNOUT_DELAY", 2000)
        .int("itemsPerPage", "NEXT_PUBLIC_ITEMS_PER_PAGE", 10)
        .text("dateFormat", "NEXT_PUBLIC_DATE_FORMAT", "MMM dd, yyyy")
        .text("dateTimeFormat", "NEXT_PUBLIC_DATETIME_FORMAT", "MMM dd, yyyy HH:mm")
        .finish()
}

/// Durations are in milliseconds
pub(super) fn api<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .section("swr", |swr| {
            swr.int("refreshInterval", "NEXT_PUBLIC_SWR_REFRESH_INTERVAL", 1000)
                .int("dedupingInterval", "NEXT_PUBLIC_SWR_DEDUPING_INTERVAL", 2000)
                .enabled("revalidateOnFocus", "NEXT_PUBLIC_SWR_REVALIDATE_FOCUS")
                .enabled("revalidateOnReconnect", "NEXT_PUBLIC_SWR_REVALIDATE_RECONNECT")
        })
        .int("timeout", "API_TIMEOUT", 30_000)
        .int("retryAttempts", "API_RETRY_ATTEMPTS", 3)
        .int("retryDelay", "API_RETRY_DELAY", 1000)
        .finish()
}

pub(super) fn features<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    FeatureFlag::ALL
        .into_iter()
        .fold(Section::new(env), |section, flag| {
            section.enabled(flag.field(), flag.env_var())
        })
        .finish()
}

pub(super) fn integrations<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    const ANALYTICS_ID: &str = "NEXT_PUBLIC_GOOGLE_ANALYTICS_ID";
    const STRIPE_KEY: &str = "NEXT_PUBLIC_PUBLISHABLE_KEY";

    Section::new(env)
        .section("googleAnalytics", |ga| {
            ga.present("enabled", ANALYTICS_ID)
                .value("trackingId", get_env_or(env, ANALYTICS_ID, ""))
        })
        .section("stripe", |stripe| {
            stripe
                .present("enabled", STRIPE_KEY)
                .value("publishableKey", get_env_or(env, STRIPE_KEY, ""))
        })
        .section("vercel", |vercel| {
            vercel
                .text("ipAddress", "NEXT_PUBLIC_VERCEL_IP_ADDRESS", "76.76.21.21")
                .text("apiUrl", "VERCEL_API_URL", "https://api.vercel.com")
        })
        .finish()
}

#[cfg(test)]
mod tests {
    use crate::builder::ConfigBuilder;
    use crate::features::FeatureFlag;
    use tooling::config::MapEnv;

    #[test]
    fn test_patterns_are_fixed() {
        let env = MapEnv::new().with("VALIDATION_WORKSPACE_SLUG_REGEX", ".*");
        let tree = ConfigBuilder::new(&env).build();

        let slug = tree.get_pattern("validation.workspace.slug.regex").unwrap();
        assert_eq!(slug.as_str(), "^[a-z0-9-]+$");
        assert!(tree.get_pattern("validation.user.email.regex").is_some());
        assert!(tree.get_pattern("validation.domain.regex").is_some());
    }

    #[test]
    fn test_validation_bounds() {
        let env = MapEnv::new()
            .with("VALIDATION_WORKSPACE_NAME_MAX", "24")
            .with("VALIDATION_INVITE_CODE_LENGTH", "eight");
        let tree = ConfigBuilder::new(&env).build();

        assert_eq!(tree.get_i64("validation.user.name.maxLength"), Some(32));
        assert_eq!(tree.get_i64("validation.workspace.name.maxLength"), Some(24));
        assert_eq!(tree.get_i64("validation.workspace.inviteCode.length"), Some(6));
    }

    #[test]
    fn test_swr_flags() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_SWR_REVALIDATE_FOCUS", "false")
            .with("NEXT_PUBLIC_SWR_REVALIDATE_RECONNECT", "0");
        let tree = ConfigBuilder::new(&env).build();

        assert_eq!(tree.get_bool("api.swr.revalidateOnFocus"), Some(false));
        assert_eq!(tree.get_bool("api.swr.revalidateOnReconnect"), Some(true));
        assert_eq!(tree.get_i64("api.swr.refreshInterval"), Some(1000));
        assert_eq!(tree.get_i64("api.timeout"), Some(30_000));
    }

    #[test]
    fn test_feature_flags_default_enabled() {
        let tree = ConfigBuilder::new(&MapEnv::new()).build();
        for flag in FeatureFlag::ALL {
            assert_eq!(tree.get_bool(&flag.path()), Some(true), "{flag}");
        }
    }

    #[test]
    fn test_feature_flag_disabled_only_by_false() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_ENABLE_BILLING", "false")
            .with("NEXT_PUBLIC_ENABLE_SIGNUP", "no");
        let tree = ConfigBuilder::new(&env).build();
        assert_eq!(tree.get_bool("features.enableBilling"), Some(false));
        assert_eq!(tree.get_bool("features.enableSignup"), Some(true));
    }

    #[test]
    fn test_integrations_presence() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_PUBLISHABLE_KEY", "pk_test_abc")
            .with("NEXT_PUBLIC_GOOGLE_ANALYTICS_ID", "");
        let tree = ConfigBuilder::new(&env).build();

        assert_eq!(tree.get_bool("integrations.stripe.enabled"), Some(true));
        assert_eq!(tree.get_str("integrations.stripe.publishableKey"), Some("pk_test_abc"));
        assert_eq!(tree.get_bool("integrations.googleAnalytics.enabled"), Some(false));
        assert_eq!(tree.get_str("integrations.googleAnalytics.trackingId"), Some(""));
        assert_eq!(tree.get_str("integrations.vercel.ipAddress"), Some("76.76.21.21"));
    }
}
