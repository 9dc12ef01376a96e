//! Client configuration.
//!
//! A [`ClientConfig`] is built once and never mutated by any operation. It can
//! be constructed in code, deserialized with serde, or loaded from the
//! environment with [`ClientConfig::from_env`].

use crate::error::{ScimClientError, ScimClientResult};
use serde::Deserialize;
use std::env;
use std::time::Duration;
use url::Url;

/// Provisioning endpoint, including the SCIM version segment.
pub const DEFAULT_BASE_URL: &str = "https://scim-provisioning.service.newrelic.com/scim/v2/";

/// Whole-request timeout applied to every call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;

pub const ENV_API_TOKEN: &str = "NEW_RELIC_SCIM_API_TOKEN";
pub const ENV_BASE_URL: &str = "NEW_RELIC_SCIM_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "NEW_RELIC_SCIM_TIMEOUT_SECS";

/// Connection settings for a [`crate::ScimClient`].
///
/// The [`Debug`] impl redacts the API token so configs can be logged safely.
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the SCIM API. Resource paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bearer credential sent with every request.
    pub api_token: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_token", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Config pointing at the New Relic endpoint with the default timeout.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_token: api_token.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `NEW_RELIC_SCIM_API_TOKEN`: bearer token
    ///
    /// Optional:
    /// - `NEW_RELIC_SCIM_BASE_URL`: overrides [`DEFAULT_BASE_URL`]
    /// - `NEW_RELIC_SCIM_TIMEOUT_SECS`: overrides [`DEFAULT_TIMEOUT_SECS`]
    pub fn from_env() -> ScimClientResult<Self> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Same as [`ClientConfig::from_env`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ScimClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = lookup(ENV_API_TOKEN)
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| ScimClientError::ConfigMissing {
                var: ENV_API_TOKEN.to_string(),
            })?;

        let base_url = lookup(ENV_BASE_URL).unwrap_or_else(default_base_url);

        let timeout_secs = match lookup(ENV_TIMEOUT_SECS) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| ScimClientError::ConfigInvalid {
                    var: ENV_TIMEOUT_SECS.to_string(),
                    reason: e.to_string(),
                })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let config = Self {
            base_url,
            api_token,
            timeout_secs,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the settings and return the parsed base URL.
    ///
    /// The returned URL always ends with `/` so resource segments can be
    /// appended to it.
    pub fn validate(&self) -> ScimClientResult<Url> {
        if self.timeout_secs == 0 {
            return Err(ScimClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        let mut url = Url::parse(&self.base_url)?;
        if url.cannot_be_a_base() {
            return Err(ScimClientError::InvalidConfig(format!(
                "base URL cannot carry resource paths: {}",
                self.base_url
            )));
        }
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ScimClientError::InvalidConfig(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn test_new_uses_defaults() {
        let config = ClientConfig::new("token");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout(), Duration::from_secs(20));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = ClientConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }

    #[test]
    fn test_validate_appends_trailing_slash() {
        let config = ClientConfig::new("t").with_base_url("http://localhost:8080/scim/v2");
        let url = config.validate().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/scim/v2/");
    }

    #[test]
    fn test_validate_keeps_default_url() {
        let url = ClientConfig::new("t").validate().unwrap();
        assert_eq!(url.as_str(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let not_a_url = ClientConfig::new("t").with_base_url("not a url");
        assert!(matches!(
            not_a_url.validate(),
            Err(ScimClientError::InvalidUrl(_))
        ));

        let ftp = ClientConfig::new("t").with_base_url("ftp://example.com/");
        assert!(matches!(
            ftp.validate(),
            Err(ScimClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ClientConfig::new("t").with_timeout_secs(0);
        assert!(matches!(
            config.validate(),
            Err(ScimClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_from_lookup_requires_token() {
        let result = ClientConfig::from_lookup(lookup_from(&[]));
        match result {
            Err(ScimClientError::ConfigMissing { var }) => assert_eq!(var, ENV_API_TOKEN),
            other => panic!("Expected ConfigMissing, got {other:?}"),
        }
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_TOKEN, "abc"),
            (ENV_BASE_URL, "https://scim.example.com/v2/"),
            (ENV_TIMEOUT_SECS, "5"),
        ]))
        .unwrap();

        assert_eq!(config.api_token, "abc");
        assert_eq!(config.base_url, "https://scim.example.com/v2/");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_lookup_rejects_bad_timeout() {
        let result = ClientConfig::from_lookup(lookup_from(&[
            (ENV_API_TOKEN, "abc"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]));
        assert!(matches!(
            result,
            Err(ScimClientError::ConfigInvalid { .. })
        ));
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ClientConfig = serde_json::from_str(r#"{"api_token":"abc"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }
}
