//! `app`, `seo`, `assets` and `theme`

use super::{BuildContext, Section};
use crate::value::ConfigValue;
use tooling::config::EnvSource;

pub(super) fn app<E: EnvSource + ?Sized>(env: &E, ctx: &BuildContext<'_>) -> ConfigValue {
    Section::new(env)
        .value("name", ctx.app_name)
        .text("tagline", "NEXT_PUBLIC_APP_TAGLINE", "Build SaaS platforms like never before")
        .text(
            "description",
            "NEXT_PUBLIC_APP_DESCRIPTION",
            "A boilerplate for your NextJS SaaS projects.",
        )
        .text_chain(
            "url",
            &["NEXT_PUBLIC_APP_URL", "APP_URL"],
            "http://localhost:3000",
        )
        .text("locale", "NEXT_PUBLIC_APP_LOCALE", "en")
        .text("currency", "NEXT_PUBLIC_APP_CURRENCY", "USD")
        .text("currencySymbol", "NEXT_PUBLIC_APP_CURRENCY_SYMBOL", "$")
        .finish()
}

pub(super) fn seo<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .text("title", "NEXT_PUBLIC_SEO_TITLE", "NextJS SaaS Boilerplate")
        .text(
            "description",
            "NEXT_PUBLIC_SEO_DESCRIPTION",
            "A boilerplate for your NextJS SaaS projects.",
        )
        .text(
            "keywords",
            "NEXT_PUBLIC_SEO_KEYWORDS",
            "nextjs, saas, boilerplate, multi-tenant, stripe",
        )
        .text(
            "loginTitle",
            "NEXT_PUBLIC_SEO_LOGIN_TITLE",
            "NextJS SaaS Boilerplate | Login",
        )
        .text("ogImage", "NEXT_PUBLIC_SEO_OG_IMAGE", "/images/seo-cover.png")
        .text("twitterCardType", "NEXT_PUBLIC_SEO_TWITTER_CARD", "summary_large_image")
        .text("twitterHandle", "NEXT_PUBLIC_SEO_TWITTER_HANDLE", "")
        .text("favicon", "NEXT_PUBLIC_SEO_FAVICON", "/favicon.ico")
        .finish()
}

pub(super) fn assets<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .text("logo", "NEXT_PUBLIC_LOGO_PATH", "/logo.png")
        .text("logoDark", "NEXT_PUBLIC_LOGO_DARK_PATH", "/logo-dark.png")
        .text("logoAlt", "NEXT_PUBLIC_LOGO_ALT", "Logo")
        .text("seoImage", "NEXT_PUBLIC_SEO_IMAGE_PATH", "/images/seo-cover.png")
        .text(
            "defaultAvatar",
            "NEXT_PUBLIC_DEFAULT_AVATAR",
            "/images/default-avatar.png",
        )
        .finish()
}

pub(super) fn theme<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .section("colors", |colors| {
            colors
                .text("primary", "NEXT_PUBLIC_THEME_PRIMARY", "#2563eb")
                .text("primaryHover", "NEXT_PUBLIC_THEME_PRIMARY_HOVER", "#1d4ed8")
                .text("danger", "NEXT_PUBLIC_THEME_DANGER", "#dc2626")
                .text("dangerHover", "NEXT_PUBLIC_THEME_DANGER_HOVER", "#b91c1c")
                .text("success", "NEXT_PUBLIC_THEME_SUCCESS", "#16a34a")
                .text("warning", "NEXT_PUBLIC_THEME_WARNING", "#ea580c")
                .text("info", "NEXT_PUBLIC_THEME_INFO", "#0284c7")
                .text("sidebarBg", "NEXT_PUBLIC_THEME_SIDEBAR_BG", "#1f2937")
                .text("sidebarText", "NEXT_PUBLIC_THEME_SIDEBAR_TEXT", "#f9fafb")
        })
        // light, dark or system
        .text("defaultMode", "NEXT_PUBLIC_THEME_DEFAULT", "light")
        .text("progressBarColor", "NEXT_PUBLIC_THEME_PROGRESS_COLOR", "#2563eb")
        .finish()
}

#[cfg(test)]
mod tests {
    use crate::builder::ConfigBuilder;
    use tooling::config::MapEnv;

    #[test]
    fn test_app_defaults() {
        let tree = ConfigBuilder::new(&MapEnv::new()).build();
        assert_eq!(tree.get_str("app.name"), Some("Nextacular"));
        assert_eq!(tree.get_str("app.url"), Some("http://localhost:3000"));
        assert_eq!(tree.get_str("app.currencySymbol"), Some("$"));
        assert_eq!(tree.get_str("seo.twitterHandle"), Some(""));
        assert_eq!(tree.get_str("theme.colors.sidebarText"), Some("#f9fafb"));
        assert_eq!(tree.get_str("theme.defaultMode"), Some("light"));
    }

    #[test]
    fn test_app_url_fallback_chain() {
        let only_server = MapEnv::new().with("APP_URL", "https://server.acme.io");
        let both = only_server.clone().with("NEXT_PUBLIC_APP_URL", "https://acme.io");
        let empty_public = only_server.clone().with("NEXT_PUBLIC_APP_URL", "");

        let url = |env: &MapEnv| {
            ConfigBuilder::new(env)
                .build()
                .get_str("app.url")
                .map(str::to_string)
        };

        assert_eq!(url(&only_server).as_deref(), Some("https://server.acme.io"));
        assert_eq!(url(&both).as_deref(), Some("https://acme.io"));
        assert_eq!(url(&empty_public).as_deref(), Some("https://server.acme.io"));
    }

    #[test]
    fn test_overrides_are_verbatim() {
        let env = MapEnv::new()
            .with("NEXT_PUBLIC_APP_NAME", " Acme ")
            .with("NEXT_PUBLIC_THEME_PRIMARY", "#000000");
        let tree = ConfigBuilder::new(&env).build();
        assert_eq!(tree.get_str("app.name"), Some(" Acme "));
        assert_eq!(tree.get_str("theme.colors.primary"), Some("#000000"));
    }
}
