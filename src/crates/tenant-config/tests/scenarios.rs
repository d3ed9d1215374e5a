//! End-to-end behavior of building, looking up and interpolating

use tenant_config::{ConfigBuilder, ConfigTree, Placeholders, TemplateInterpolator};
use tooling::config::MapEnv;

fn interpolator_for(env: &MapEnv) -> TemplateInterpolator {
    TemplateInterpolator::new(&ConfigTree::from_env(env))
}

#[test]
fn welcome_message_mixes_default_and_override() {
    let interpolator = interpolator_for(&MapEnv::new());
    let text = interpolator.interpolate(
        "Hi {appName}, welcome to {workspaceName}",
        &Placeholders::new().with("workspaceName", "Acme"),
    );
    assert_eq!(text, "Hi Nextacular, welcome to Acme");
}

#[test]
fn reserved_token_without_default_is_empty() {
    let interpolator = interpolator_for(&MapEnv::new());
    assert_eq!(interpolator.interpolate("Code: {email}", &Placeholders::new()), "Code: ");
}

#[test]
fn custom_key_is_independent_of_reserved_tokens() {
    let interpolator = interpolator_for(&MapEnv::new().with("NEXT_PUBLIC_APP_NAME", "Acme"));
    let text = interpolator.interpolate(
        "{custom} stays {appName}",
        &Placeholders::new().with("custom", "X"),
    );
    assert_eq!(text, "X stays Acme");
}

#[test]
fn malformed_free_workspace_limit_uses_default() {
    let env = MapEnv::new().with("NEXT_PUBLIC_PLAN_FREE_WORKSPACES", "abc");
    let tree = ConfigBuilder::new(&env).build();
    assert_eq!(tree.get_i64("subscription.FREE.limits.workspaces"), Some(1));
}

#[test]
fn double_braces_keep_outer_pair() {
    let interpolator = interpolator_for(&MapEnv::new());
    assert_eq!(
        interpolator.interpolate("{{appName}}", &Placeholders::new()),
        "{Nextacular}"
    );
}

#[test]
fn override_values_are_not_expanded() {
    let interpolator = interpolator_for(&MapEnv::new());
    let text = interpolator.interpolate(
        "Invited to {workspaceName}",
        &Placeholders::new().with("workspaceName", "{email}{appName}"),
    );
    assert_eq!(text, "Invited to {email}{appName}");
}

#[test]
fn falsy_values_are_distinct_from_missing_paths() {
    let env = MapEnv::new()
        .with("NEXT_PUBLIC_PLAN_FREE_STORAGE", "0")
        .with("NEXT_PUBLIC_ENABLE_I18N", "false");
    let tree = ConfigTree::from_env(&env);

    assert_eq!(tree.get_i64("subscription.FREE.limits.storage"), Some(0));
    assert_eq!(tree.get_bool("features.enableI18n"), Some(false));
    assert!(tree.resolve("subscription.FREE.limits.bandwidth").is_none());
    assert!(tree.resolve("subscription.FREE.price.amount").is_none());
}

#[test]
fn copyright_line_renders_with_app_name() {
    let env = MapEnv::new().with("NEXT_PUBLIC_APP_NAME", "Acme");
    let tree = ConfigBuilder::new(&env).with_year(2026).build();
    let footer = TemplateInterpolator::new(&tree)
        .render("landing.footer.copyright", &Placeholders::new())
        .unwrap();
    assert_eq!(footer, "© 2026 Acme. All rights reserved.");
}

#[test]
fn login_message_takes_email_override() {
    let interpolator = interpolator_for(&MapEnv::new());
    let text = interpolator
        .render(
            "messages.login.checkEmail",
            &Placeholders::new().with("email", "jane@acme.io"),
        )
        .unwrap();
    assert_eq!(text, "Please check your email (jane@acme.io) for the login link.");
}

#[test]
fn redacted_dump_hides_credentials() {
    let env = MapEnv::new().with("NEXT_PUBLIC_PUBLISHABLE_KEY", "pk_live_abc123");
    let tree = ConfigTree::from_env(&env);
    let dump = tree.to_redacted_json().to_string();
    assert!(!dump.contains("pk_live_abc123"));
    assert!(dump.contains("[REDACTED]"));
}
