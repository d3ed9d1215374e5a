//! User-facing copy: `email`, `sitemap`, `placeholders`, `landing` and `messages`

use super::{BuildContext, Section};
use crate::value::{ConfigValue, Record};
use tooling::config::EnvSource;

const FEATURE_BLURB: &str =
    "Some quick example text to build on the card title and make up the bulk of the card's content.";

pub(super) fn email<E: EnvSource + ?Sized>(env: &E, ctx: &BuildContext<'_>) -> ConfigValue {
    Section::new(env)
        .text("from", "EMAIL_FROM", "noreply@example.com")
        .text("fromName", "EMAIL_FROM_NAME", ctx.app_name)
        .text("subjectPrefix", "EMAIL_SUBJECT_PREFIX", format!("[{}]", ctx.app_name))
        .section("templates", |templates| {
            templates
                .section("signin", |t| {
                    t.text("subject", "EMAIL_SIGNIN_SUBJECT", "Sign in to {appName}")
                        .text("greeting", "EMAIL_SIGNIN_GREETING", "Hi there!")
                })
                .section("invitation", |t| {
                    t.text(
                        "subject",
                        "EMAIL_INVITATION_SUBJECT",
                        "You have been invited to {workspaceName}",
                    )
                    .text("greeting", "EMAIL_INVITATION_GREETING", "Hello!")
                })
                .section("workspaceCreate", |t| {
                    t.text("subject", "EMAIL_WORKSPACE_SUBJECT", "Welcome to {workspaceName}")
                        .text("greeting", "EMAIL_WORKSPACE_GREETING", "Congratulations!")
                })
                .section("emailUpdate", |t| {
                    t.text("subject", "EMAIL_UPDATE_SUBJECT", "Your email has been updated")
                        .text("greeting", "EMAIL_UPDATE_GREETING", "Hello!")
                })
        })
        .finish()
}

pub(super) fn sitemap<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .strings("staticPages", &["index", "auth/login"])
        .text("changeFrequency", "SITEMAP_CHANGE_FREQUENCY", "monthly")
        .float("priority", "SITEMAP_PRIORITY", 1.0)
        .value("schemaUrl", "http://www.sitemaps.org/schemas/sitemap/0.9")
        .finish()
}

/// Sample values shown in empty form inputs
pub(super) fn placeholders<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    Section::new(env)
        .text("email", "NEXT_PUBLIC_PLACEHOLDER_EMAIL", "user@email.com")
        .text("name", "NEXT_PUBLIC_PLACEHOLDER_NAME", "John Doe")
        .text("workspaceName", "NEXT_PUBLIC_PLACEHOLDER_WORKSPACE", "My Workspace")
        .text("domain", "NEXT_PUBLIC_PLACEHOLDER_DOMAIN", "mydomain.com")
        .finish()
}

pub(super) fn landing<E: EnvSource + ?Sized>(env: &E, ctx: &BuildContext<'_>) -> ConfigValue {
    Section::new(env)
        .section("hero", |hero| {
            hero.section("title", |title| {
                title
                    .text("line1", "NEXT_PUBLIC_HERO_TITLE_1", "Build SaaS platforms")
                    .text("line2", "NEXT_PUBLIC_HERO_TITLE_2", "like never before")
            })
            .text(
                "subtitle",
                "NEXT_PUBLIC_HERO_SUBTITLE",
                "Quickly build landing pages that will help you get results fast",
            )
            .text("ctaPrimary", "NEXT_PUBLIC_HERO_CTA_PRIMARY", "Get Started")
            .text("ctaSecondary", "NEXT_PUBLIC_HERO_CTA_SECONDARY", "Live Demo")
            .text("authenticatedCta", "NEXT_PUBLIC_HERO_AUTH_CTA", "Go to Dashboard")
            .text("unauthenticatedCta", "NEXT_PUBLIC_HERO_UNAUTH_CTA", "Login")
        })
        .section("features", |features| {
            features
                .text(
                    "title",
                    "NEXT_PUBLIC_FEATURES_TITLE",
                    "A better way to build your SaaS",
                )
                .text(
                    "subtitle",
                    "NEXT_PUBLIC_FEATURES_SUBTITLE",
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit",
                )
                .value("items", feature_items(env))
        })
        .section("pricing", |pricing| {
            pricing
                .text(
                    "title",
                    "NEXT_PUBLIC_PRICING_TITLE",
                    "The right pricing for you, whoever you are",
                )
                .text(
                    "subtitle",
                    "NEXT_PUBLIC_PRICING_SUBTITLE",
                    "It features multiple CSS components based on the Tailwind CSS design system",
                )
                .text("freeCta", "NEXT_PUBLIC_PRICING_FREE_CTA", "Get Started with Hobby")
                .text(
                    "premiumCta",
                    "NEXT_PUBLIC_PRICING_PREMIUM_CTA",
                    "Get Started with Premium",
                )
        })
        .section("guides", |guides| {
            guides
                .text("title", "NEXT_PUBLIC_GUIDES_TITLE", "Supercharge your website")
                .text("subtitle", "NEXT_PUBLIC_GUIDES_SUBTITLE", "Lorem ipsum dolor sit amet")
        })
        .section("testimonial", |testimonial| {
            testimonial
                .text(
                    "quote",
                    "NEXT_PUBLIC_TESTIMONIAL_QUOTE",
                    "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
                     tempor incididunt ut labore et dolore magna aliqua.",
                )
                .text("author", "NEXT_PUBLIC_TESTIMONIAL_AUTHOR", "Adam Warlock")
                .text("position", "NEXT_PUBLIC_TESTIMONIAL_POSITION", "CEO at ABC Inc.")
                .text("avatar", "NEXT_PUBLIC_TESTIMONIAL_AVATAR", "/images/avatar.png")
        })
        .section("cta", |cta| {
            cta.text("title", "NEXT_PUBLIC_CTA_TITLE", "Build SaaS platforms like a PRO")
                .text("subtitle", "NEXT_PUBLIC_CTA_SUBTITLE", "Start your free trial today")
                .text("button", "NEXT_PUBLIC_CTA_BUTTON", "Subscribe Now")
        })
        .section("footer", |footer| {
            footer
                .value("links", footer_links())
                .section("socialLinks", |social| {
                    social
                        .text("twitter", "NEXT_PUBLIC_SOCIAL_TWITTER", "")
                        .text("github", "NEXT_PUBLIC_SOCIAL_GITHUB", "")
                        .text("linkedin", "NEXT_PUBLIC_SOCIAL_LINKEDIN", "")
                        .text("discord", "NEXT_PUBLIC_SOCIAL_DISCORD", "")
                })
                // `{appName}` is left for the interpolator
                .text(
                    "copyright",
                    "NEXT_PUBLIC_COPYRIGHT",
                    format!("© {} {{appName}}. All rights reserved.", ctx.year),
                )
        })
        .finish()
}

fn feature_items<E: EnvSource + ?Sized>(env: &E) -> ConfigValue {
    const TITLES: [&str; 3] = ["Excellent Services", "Grow Your Market", "Launch Time"];

    let items = TITLES
        .iter()
        .zip(1..)
        .map(|(title, n)| {
            Section::new(env)
                .text("title", &format!("NEXT_PUBLIC_FEATURE_{n}_TITLE"), *title)
                .text("description", &format!("NEXT_PUBLIC_FEATURE_{n}_DESC"), FEATURE_BLURB)
                .finish()
        })
        .collect::<Vec<_>>();

    ConfigValue::List(items)
}

fn footer_links() -> ConfigValue {
    const LINKS: [(&str, &str); 5] = [
        ("About", "/about"),
        ("Showcase", "/showcase"),
        ("Community", "/community"),
        ("Privacy", "/privacy"),
        ("Terms", "/terms"),
    ];

    LINKS
        .iter()
        .map(|(label, href)| {
            let mut link = Record::new();
            link.insert("label".to_string(), (*label).into());
            link.insert("href".to_string(), (*href).into());
            ConfigValue::Record(link)
        })
        .collect::<Vec<_>>()
        .into()
}

fn group(entries: &[(&str, &str)]) -> ConfigValue {
    ConfigValue::Record(
        entries
            .iter()
            .map(|(key, text)| (key.to_string(), ConfigValue::from(*text)))
            .collect(),
    )
}

/// Fixed UI copy, not configurable from the environment
pub(super) fn messages() -> ConfigValue {
    let sections = [
        (
            "login",
            group(&[
                ("checkEmail", "Please check your email ({email}) for the login link."),
                ("error", "An error occurred during sign in. Please try again."),
            ]),
        ),
        (
            "workspace",
            group(&[
                ("created", "Workspace successfully created!"),
                ("nameUpdated", "Workspace name successfully updated!"),
                ("slugUpdated", "Workspace slug successfully updated!"),
                ("deleted", "Workspace successfully deleted!"),
            ]),
        ),
        (
            "invitation",
            group(&[
                ("sent", "Invitations sent successfully!"),
                ("accepted", "Accepted invitation!"),
                ("declined", "Declined invitation!"),
            ]),
        ),
        (
            "user",
            group(&[
                ("nameUpdated", "Name successfully updated!"),
                ("emailUpdated", "Email successfully updated and signing you out!"),
                ("accountDeactivated", "Account has been deactivated!"),
            ]),
        ),
        (
            "domain",
            group(&[
                ("added", "Domain successfully added to workspace!"),
                ("verified", "Domain successfully verified!"),
                ("deleted", "Domain successfully deleted from workspace!"),
            ]),
        ),
        ("clipboard", group(&[("copied", "Copied to clipboard!")])),
        (
            "billing",
            group(&[
                ("upgrading", "Redirecting to checkout..."),
                ("upgraded", "Subscription upgraded successfully!"),
            ]),
        ),
        (
            "errors",
            group(&[
                ("generic", "An error occurred. Please try again."),
                ("unauthorized", "You are not authorized to perform this action."),
                ("notFound", "Resource not found."),
                ("validation", "Please check your input and try again."),
            ]),
        ),
    ];

    ConfigValue::Record(
        sections
            .into_iter()
            .map(|(name, value)| (name.to_string(), value))
            .collect(),
    )
}
