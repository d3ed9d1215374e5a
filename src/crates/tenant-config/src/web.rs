//! Settings handed to the web framework's build
//!
//! Everything here is static except the public app URL, which is taken from
//! the resolved `app.url`.

use crate::error::Result;
use crate::tree::ConfigTree;
use serde::Serialize;
use std::collections::BTreeMap;

/// Route pattern the security headers apply to
pub const ALL_ROUTES: &str = "/:path*";

const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("X-DNS-Prefetch-Control", "on"),
    ("X-Frame-Options", "SAMEORIGIN"),
    ("X-Content-Type-Options", "nosniff"),
    ("Referrer-Policy", "origin-when-cross-origin"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub key: String,
    pub value: String,
}

/// Headers added to every response matching `source`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderRule {
    pub source: String,
    pub headers: Vec<Header>,
}

impl HeaderRule {
    pub fn security() -> Self {
        Self {
            source: ALL_ROUTES.to_string(),
            headers: SECURITY_HEADERS
                .iter()
                .map(|(key, value)| Header {
                    key: key.to_string(),
                    value: value.to_string(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
}

/// Remote image optimization settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePolicy {
    pub remote_patterns: Vec<RemotePattern>,
    pub formats: Vec<String>,
    #[serde(rename = "dangerouslyAllowSVG")]
    pub allow_svg: bool,
    pub content_disposition_type: String,
    pub content_security_policy: String,
}

impl Default for ImagePolicy {
    fn default() -> Self {
        Self {
            // any https host
            remote_patterns: vec![RemotePattern {
                protocol: "https".to_string(),
                hostname: "**".to_string(),
            }],
            formats: vec!["image/avif".to_string(), "image/webp".to_string()],
            allow_svg: true,
            content_disposition_type: "attachment".to_string(),
            content_security_policy: "default-src 'self'; script-src 'none'; sandbox;".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub source: String,
    pub destination: String,
    pub permanent: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerActions {
    pub body_size_limit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Experimental {
    pub server_actions: ServerActions,
}

/// Build settings for the web framework
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSettings {
    pub react_strict_mode: bool,
    pub images: ImagePolicy,
    pub experimental: Experimental,
    pub redirects: Vec<Redirect>,
    pub headers: Vec<HeaderRule>,
    /// Variables exposed to the browser bundle
    pub env: BTreeMap<String, String>,
}

impl WebSettings {
    pub fn from_tree(tree: &ConfigTree) -> Result<Self> {
        let app_url = tree.require_str("app.url")?;

        Ok(Self {
            react_strict_mode: true,
            images: ImagePolicy::default(),
            experimental: Experimental {
                server_actions: ServerActions {
                    body_size_limit: "2mb".to_string(),
                },
            },
            redirects: Vec::new(),
            headers: vec![HeaderRule::security()],
            env: BTreeMap::from([("NEXT_PUBLIC_APP_URL".to_string(), app_url.to_string())]),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tooling::config::MapEnv;

    #[test]
    fn test_security_headers() {
        let web = WebSettings::from_tree(&ConfigTree::from_env(&MapEnv::new())).unwrap();
        assert_eq!(web.headers.len(), 1);
        let headers: Vec<(&str, &str)> = web.headers[0]
            .headers
            .iter()
            .map(|h| (h.key.as_str(), h.value.as_str()))
            .collect();
        assert_eq!(headers, SECURITY_HEADERS.to_vec());
        assert!(web.redirects.is_empty());
        assert!(web.react_strict_mode);
    }

    #[test]
    fn test_public_env_uses_resolved_url() {
        let env = MapEnv::new().with("APP_URL", "https://acme.io");
        let web = WebSettings::from_tree(&ConfigTree::from_env(&env)).unwrap();
        assert_eq!(
            web.env.get("NEXT_PUBLIC_APP_URL").map(String::as_str),
            Some("https://acme.io")
        );
    }

    #[test]
    fn test_serialized_shape() {
        let web = WebSettings::from_tree(&ConfigTree::from_env(&MapEnv::new())).unwrap();
        let json = serde_json::to_value(&web).unwrap();
        assert_eq!(json["experimental"]["serverActions"]["bodySizeLimit"], json!("2mb"));
        assert_eq!(json["images"]["dangerouslyAllowSVG"], json!(true));
        assert_eq!(
            json["images"]["remotePatterns"],
            json!([{"protocol": "https", "hostname": "**"}])
        );
        assert_eq!(json["headers"][0]["source"], json!("/:path*"));
        assert_eq!(json["reactStrictMode"], json!(true));
    }
}
