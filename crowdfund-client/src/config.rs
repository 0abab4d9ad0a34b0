//! Client configuration

use std::time::Duration;

use chrono::{FixedOffset, Local};

use crate::error::{ClientError, ClientResult};

/// Default name of the cookie holding the auth token
pub const DEFAULT_COOKIE_NAME: &str = "auth_token";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration for connecting to the crowdfunding backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL including the version prefix (e.g., "http://localhost:4000/v1")
    pub base_url: String,

    /// Token to seed the session with
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Name of the session cookie holding the auth token
    pub cookie_name: String,

    /// User-Agent header sent with every request
    pub user_agent: Option<String>,

    /// Offset form dates are interpreted in. `None` uses the machine's local offset.
    pub utc_offset: Option<FixedOffset>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            user_agent: None,
            utc_offset: None,
        }
    }

    /// Load from the environment, reading a `.env` file first if present.
    ///
    /// - `API_URL` (required)
    /// - `API_TIMEOUT_SECS` (default 30)
    /// - `AUTH_COOKIE_NAME` (default `auth_token`)
    /// - `AUTH_TOKEN` (optional session seed)
    pub fn from_env() -> ClientResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ClientResult<Self> {
        let base_url = lookup("API_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ClientError::Config("API_URL must be set".into()))?;

        let mut config = Self::new(base_url);
        if let Some(raw) = lookup("API_TIMEOUT_SECS") {
            let secs = raw.trim().parse::<u64>().map_err(|_| {
                ClientError::Config(format!("API_TIMEOUT_SECS is not a number: {raw}"))
            })?;
            config = config.with_timeout(secs);
        }
        if let Some(name) = lookup("AUTH_COOKIE_NAME").filter(|n| !n.is_empty()) {
            config = config.with_cookie_name(name);
        }
        if let Some(token) = lookup("AUTH_TOKEN").filter(|t| !t.is_empty()) {
            config = config.with_token(token);
        }
        Ok(config)
    }

    /// Set the auth token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the session cookie name
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    pub fn with_user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Pin the offset used to normalize form dates
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// Offset form dates are read in.
    pub fn offset(&self) -> FixedOffset {
        self.utc_offset.unwrap_or_else(|| *Local::now().offset())
    }

    /// Join a path onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:4000/v1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_from_lookup_defaults() {
        let config = ClientConfig::from_lookup(lookup(&[("API_URL", "http://api.test/v1/")])).unwrap();
        assert_eq!(config.base_url, "http://api.test/v1");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.cookie_name, DEFAULT_COOKIE_NAME);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "http://api.test/v1"),
            ("API_TIMEOUT_SECS", "5"),
            ("AUTH_COOKIE_NAME", "session"),
            ("AUTH_TOKEN", "abc"),
        ]))
        .unwrap();
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
        assert_eq!(config.cookie_name, "session");
        assert_eq!(config.token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_missing_url_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[test]
    fn test_bad_timeout_is_config_error() {
        let err = ClientConfig::from_lookup(lookup(&[
            ("API_URL", "http://api.test/v1"),
            ("API_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("API_TIMEOUT_SECS"));
    }

    #[test]
    fn test_url_join() {
        let config = ClientConfig::new("http://api.test/v1/");
        assert_eq!(config.url("/users/me"), "http://api.test/v1/users/me");
        assert_eq!(config.url("healthCheck"), "http://api.test/v1/healthCheck");
    }
}
