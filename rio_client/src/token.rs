//! Bearer token supply for outgoing calls.
//!
//! [`LoginTokenProvider`] logs in with username and password on first use and
//! caches the token until it expires or the service rejects it.
//! [`StaticTokenProvider`] hands out a pre-issued long-lived token and never
//! logs in.

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{header::CONTENT_TYPE, Method};
use tokio::sync::Mutex;
use url::Url;

use crate::{
    client::{read_response, JSON_CONTENT_TYPE},
    types::{TokenResponse, UserLoginCredentials},
    Error,
};

/// Supplies the bearer token attached to every call.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a token, logging in first if none is cached.
    async fn token(&self) -> Result<String, Error>;

    /// Forgets `stale` after the service rejected it with 401.
    ///
    /// Returns `false` if this provider cannot obtain a different token, in
    /// which case the rejected call is not retried.
    async fn invalidate(&self, stale: &str) -> bool;
}

/// A pre-issued token that is used as-is.
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    pub fn new(token: &str) -> Self {
        Self {
            token: token.to_string(),
        }
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn token(&self) -> Result<String, Error> {
        Ok(self.token.clone())
    }

    async fn invalidate(&self, _stale: &str) -> bool {
        false
    }
}

/// Logs in via `POST {api}/tokens` and caches the result.
///
/// The cache lock is held across the login call, so callers racing on first
/// use wait for one login instead of each issuing their own.
pub struct LoginTokenProvider {
    http: reqwest::Client,
    login_url: Url,
    credentials: UserLoginCredentials,
    cached: Mutex<Option<TokenResponse>>,
}

impl LoginTokenProvider {
    pub fn new(
        http: reqwest::Client,
        api_url: &str,
        username: &str,
        password: &str,
    ) -> Result<Self, Error> {
        Ok(Self {
            http,
            login_url: Url::parse(&format!("{}/tokens", api_url))?,
            credentials: UserLoginCredentials {
                username: username.to_string(),
                password: password.to_string(),
            },
            cached: Mutex::new(None),
        })
    }

    async fn login(&self) -> Result<TokenResponse, Error> {
        tracing::info!(
            "Logging in as {} at {}",
            self.credentials.username,
            self.login_url
        );
        let body = serde_json::to_string(&self.credentials).map_err(Error::Encode)?;
        let response = self
            .http
            .post(self.login_url.clone())
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Login request to {} failed: {}", self.login_url, e);
                Error::transport(Method::POST, self.login_url.as_str(), e)
            })?;
        let token = read_response::<TokenResponse>(Method::POST, self.login_url.as_str(), response)
            .await?
            .into_inner();
        Ok(token)
    }
}

#[async_trait]
impl TokenProvider for LoginTokenProvider {
    async fn token(&self) -> Result<String, Error> {
        let mut cached = self.cached.lock().await;
        if let Some(current) = cached.as_ref() {
            if !current.is_expired_at(Utc::now()) {
                return Ok(current.token.clone());
            }
            tracing::debug!("Cached token expired, logging in again");
        }
        let fresh = self.login().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    async fn invalidate(&self, stale: &str) -> bool {
        let mut cached = self.cached.lock().await;
        // another caller may already have replaced it
        if cached.as_ref().is_some_and(|current| current.token == stale) {
            *cached = None;
        }
        true
    }
}
