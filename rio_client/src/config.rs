//! Client configuration, built in code or read from the environment.

use std::time::Duration;

use url::Url;

use crate::{user_agent::get_user_agent, Error};

/// Request timeout applied to every call unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const ENV_ENDPOINT: &str = "RIO_ENDPOINT";
const ENV_USERNAME: &str = "RIO_USERNAME";
const ENV_PASSWORD: &str = "RIO_PASSWORD";
const ENV_TOKEN: &str = "RIO_TOKEN";
const ENV_TIMEOUT_SECS: &str = "RIO_TIMEOUT_SECS";

/// Connection settings for a [`Client`](crate::Client).
#[derive(Clone)]
pub struct ClientConfig {
    /// `{scheme}://{host}:{port}` of the service, without the `/api` prefix.
    pub endpoint: Url,
    pub username: String,
    pub(crate) password: String,
    /// Pre-issued token. When set, no login call is ever made.
    pub long_lived_token: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("username", &self.username)
            .field("long_lived_token", &self.long_lived_token.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(endpoint: &str, username: &str, password: &str) -> Result<Self, Error> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            username: username.to_string(),
            password: password.to_string(),
            long_lived_token: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: get_user_agent(),
        })
    }

    /// Reads `RIO_ENDPOINT`, `RIO_USERNAME`, `RIO_PASSWORD` and the optional
    /// `RIO_TOKEN` and `RIO_TIMEOUT_SECS`, loading a `.env` file first if
    /// one exists.
    pub fn from_env() -> Result<Self, Error> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| Error::Config(format!("{} is not set", key)))
        };
        let endpoint = required(ENV_ENDPOINT)?;
        let token = lookup(ENV_TOKEN).filter(|v| !v.trim().is_empty());

        // a long-lived token makes the credentials optional
        let (username, password) = if token.is_some() {
            (
                lookup(ENV_USERNAME).unwrap_or_default(),
                lookup(ENV_PASSWORD).unwrap_or_default(),
            )
        } else {
            (required(ENV_USERNAME)?, required(ENV_PASSWORD)?)
        };

        let mut config = Self::new(&endpoint, &username, &password)?;
        config.long_lived_token = token;
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs = secs.trim().parse::<u64>().map_err(|e| {
                Error::Config(format!("{} must be a number of seconds: {}", ENV_TIMEOUT_SECS, e))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_long_lived_token(mut self, token: &str) -> Self {
        self.long_lived_token = Some(token.to_string());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    /// Base of every resource path: `{scheme}://{host}:{port}/api`.
    pub fn api_url(&self) -> String {
        format!("{}/api", self.endpoint.as_str().trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn api_url_appends_prefix() {
        let config = ClientConfig::new("https://rio.local:5050/", "u", "p").unwrap();
        assert_eq!(config.api_url(), "https://rio.local:5050/api");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("rio-client/"));
    }

    #[test]
    fn from_lookup_reads_credentials() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("RIO_ENDPOINT", "https://rio.local:5050"),
            ("RIO_USERNAME", "spectra"),
            ("RIO_PASSWORD", "spectra"),
            ("RIO_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.username, "spectra");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.long_lived_token.is_none());
    }

    #[test]
    fn from_lookup_token_makes_credentials_optional() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("RIO_ENDPOINT", "https://rio.local:5050"),
            ("RIO_TOKEN", "abc"),
        ]))
        .unwrap();
        assert_eq!(config.long_lived_token.as_deref(), Some("abc"));
    }

    #[test]
    fn from_lookup_reports_missing_values() {
        let err = ClientConfig::from_lookup(lookup(&[("RIO_ENDPOINT", "https://rio.local")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(ref msg) if msg == "RIO_USERNAME is not set"));

        let err = ClientConfig::from_lookup(lookup(&[
            ("RIO_ENDPOINT", "https://rio.local"),
            ("RIO_TOKEN", "abc"),
            ("RIO_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn debug_hides_secrets() {
        let config = ClientConfig::new("https://rio.local", "u", "hunter2")
            .unwrap()
            .with_long_lived_token("tok-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hunter2"));
        assert!(!printed.contains("tok-secret"));
    }
}
