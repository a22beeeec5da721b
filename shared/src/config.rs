//! Backend connection settings.

use crate::error::ConfigError;

/// Name of the build-time variable holding the backend base URL.
pub const URL_VAR: &str = "STARTUP_STORIES_SUPABASE_URL";
/// Name of the build-time variable holding the public (anon) API key.
pub const ANON_KEY_VAR: &str = "STARTUP_STORIES_SUPABASE_ANON_KEY";

/// Validated endpoint and public key of the hosted backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    url: String,
    anon_key: String,
}

impl BackendConfig {
    /// Validate raw values. Both must be present and non-blank.
    pub fn from_values(url: Option<&str>, anon_key: Option<&str>) -> Result<Self, ConfigError> {
        let url = required(URL_VAR, url)?;
        let anon_key = required(ANON_KEY_VAR, anon_key)?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(url));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key,
        })
    }

    /// Values baked in at compile time.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("STARTUP_STORIES_SUPABASE_URL"),
            option_env!("STARTUP_STORIES_SUPABASE_ANON_KEY"),
        )
    }

    /// Base URL without a trailing slash.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Public key sent as `apikey` on every request.
    pub fn anon_key(&self) -> &str {
        &self.anon_key
    }

    /// `{url}/rest/v1/{table}`
    pub fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url, table)
    }

    /// `{url}/auth/v1/{path}`
    pub fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.url, path.trim_start_matches('/'))
    }
}

fn required(name: &'static str, value: Option<&str>) -> Result<String, ConfigError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or(ConfigError::Missing(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_or_blank_values() {
        assert_eq!(
            BackendConfig::from_values(None, Some("key")),
            Err(ConfigError::Missing(URL_VAR))
        );
        assert_eq!(
            BackendConfig::from_values(Some("https://demo.supabase.co"), Some("   ")),
            Err(ConfigError::Missing(ANON_KEY_VAR))
        );
    }

    #[test]
    fn rejects_url_without_scheme() {
        assert!(matches!(
            BackendConfig::from_values(Some("demo.supabase.co"), Some("key")),
            Err(ConfigError::InvalidUrl(_))
        ));
    }

    #[test]
    fn builds_endpoint_urls() {
        let config = BackendConfig::from_values(Some(" https://demo.supabase.co/ "), Some("anon"))
            .expect("valid config");
        assert_eq!(config.url(), "https://demo.supabase.co");
        assert_eq!(config.rest_url("case_studies"), "https://demo.supabase.co/rest/v1/case_studies");
        assert_eq!(
            config.auth_url("/token?grant_type=password"),
            "https://demo.supabase.co/auth/v1/token?grant_type=password"
        );
    }
}
