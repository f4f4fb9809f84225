//! Connection settings for the catalogue backend.

use std::time::Duration;

use catalogue_core::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS, env_non_empty, env_parse_with_default};

pub const ENV_API_URL: &str = "CATALOGUE_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "CATALOGUE_HTTP_TIMEOUT_SECS";
pub const ENV_USERNAME: &str = "CATALOGUE_USERNAME";
pub const ENV_PASSWORD: &str = "CATALOGUE_PASSWORD";

#[derive(Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub username: Option<String>,
    pub password: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_owned(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            username: None,
            password: None,
        }
    }
}

impl ClientConfig {
    /// Read `CATALOGUE_*` variables, falling back to defaults.
    pub fn from_env() -> Self {
        let timeout_secs = env_parse_with_default(ENV_TIMEOUT_SECS, DEFAULT_TIMEOUT_SECS);
        Self {
            base_url: env_non_empty(ENV_API_URL).unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
            timeout: Duration::from_secs(timeout_secs),
            username: env_non_empty(ENV_USERNAME),
            password: env_non_empty(ENV_PASSWORD),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Username and password, only when both are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.username.as_deref().zip(self.password.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_masks_password() {
        let config = ClientConfig {
            username: Some("admin".to_owned()),
            password: Some("admin123".to_owned()),
            ..ClientConfig::default()
        };
        let rendered = format!("{config:?}");
        assert!(rendered.contains("admin"));
        assert!(!rendered.contains("admin123"));
    }

    #[test]
    fn test_credentials_need_both_parts() {
        let config = ClientConfig { username: Some("admin".to_owned()), ..ClientConfig::default() };
        assert!(config.credentials().is_none());
        let config = ClientConfig { password: Some("x".to_owned()), ..config };
        assert_eq!(config.credentials(), Some(("admin", "x")));
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default().with_base_url("http://backend:8080");
        assert_eq!(config.base_url, "http://backend:8080");
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
