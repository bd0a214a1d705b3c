use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_IDENTITY_BASE_URL, DEFAULT_REQUEST_TIMEOUT_SECS,
    DEFAULT_SESSION_BASE_URL, DEFAULT_WEB_VERSION_ENV,
};

use serde::Deserialize;

pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Remote service endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the identity service (client check, web version)
    pub identity_base_url: String,
    /// Base URL of the session service (verification codes, phone login)
    pub session_base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub request_timeout_secs: u64,
    /// `env` query value sent with web version lookups
    pub web_version_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            identity_base_url: String::from(DEFAULT_IDENTITY_BASE_URL),
            session_base_url: String::from(DEFAULT_SESSION_BASE_URL),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            web_version_env: String::from(DEFAULT_WEB_VERSION_ENV),
        }
    }
}

impl ApiConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::validate_url("api.identity_base_url", &self.identity_base_url)?;
        Self::validate_url("api.session_base_url", &self.session_base_url)?;

        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::api(format!(
                "api.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.web_version_env.trim().is_empty() {
            return Err(ConfigError::api("api.web_version_env cannot be empty"));
        }

        Ok(())
    }

    fn validate_url(name: &str, url: &str) -> ConfigErrorResult<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::api(format!(
                "{name} must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }
}
