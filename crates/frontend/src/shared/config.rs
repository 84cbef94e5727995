//! Endpoint configuration.
//!
//! Both endpoints can be fixed at build time (`APP_GRAPHQL_URL`,
//! `PLUGIN_API_URL`); otherwise they are derived from the page location.

use crate::shared::api_utils::api_base;

const GRAPHQL_PATH: &str = "/graphql";
const PLUGIN_API_PATH: &str = "/plugin-api/graphql";

/// Application GraphQL endpoint (installations)
pub fn graphql_url() -> String {
    resolve_url(option_env!("APP_GRAPHQL_URL"), &api_base(), GRAPHQL_PATH)
}

/// Plugin catalog GraphQL endpoint
pub fn plugin_api_url() -> String {
    resolve_url(option_env!("PLUGIN_API_URL"), &api_base(), PLUGIN_API_PATH)
}

fn resolve_url(configured: Option<&str>, base: &str, path: &str) -> String {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => format!("{}{}", base.trim_end_matches('/'), path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_url_wins() {
        assert_eq!(
            resolve_url(Some("https://plugins.example.com/graphql"), "http://h:3000", PLUGIN_API_PATH),
            "https://plugins.example.com/graphql"
        );
    }

    #[test]
    fn test_blank_override_falls_back_to_location() {
        assert_eq!(
            resolve_url(Some("  "), "http://localhost:3000/", GRAPHQL_PATH),
            "http://localhost:3000/graphql"
        );
        assert_eq!(
            resolve_url(None, "http://localhost:3000", PLUGIN_API_PATH),
            "http://localhost:3000/plugin-api/graphql"
        );
    }
}
