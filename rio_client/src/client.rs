//! HTTP client for the Rio REST API.
//!
//! Every endpoint method funnels through the same pipeline: build the URL,
//! encode the body, attach the bearer token, send, then decode either the
//! expected response or a structured [`ErrorMessage`](crate::ErrorMessage).

use std::sync::Arc;

use reqwest::{header::CONTENT_TYPE, Method, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    config::ClientConfig,
    encoding::{check_path, encode_body, query_string},
    token::{LoginTokenProvider, StaticTokenProvider, TokenProvider},
    types::{EmptyRequest, EmptyResponse, Response, EMPTY_BODY},
    Error,
};

pub(crate) const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Query parameters of a call; `None` values are left out of the URL.
pub(crate) type Params = [(String, Option<String>)];

/// HTTP client for the Rio REST API.
///
/// Cheap to clone: clones share the connection pool and the token cache, so
/// independent calls can run concurrently from separate tasks.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    /// `{scheme}://{host}:{port}/api`, no trailing slash.
    api_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_url", &self.api_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client that logs in with the configured credentials, or
    /// uses the long-lived token if one is configured.
    pub fn new(config: &ClientConfig) -> Result<Self, Error> {
        let http = build_http(config)?;
        let api_url = config.api_url();
        let tokens: Arc<dyn TokenProvider> = match &config.long_lived_token {
            Some(token) => Arc::new(StaticTokenProvider::new(token)),
            None => Arc::new(LoginTokenProvider::new(
                http.clone(),
                &api_url,
                &config.username,
                &config.password,
            )?),
        };
        Ok(Self {
            http,
            api_url,
            tokens,
        })
    }

    /// Creates a client with a caller supplied token provider.
    pub fn with_token_provider(
        config: &ClientConfig,
        tokens: Arc<dyn TokenProvider>,
    ) -> Result<Self, Error> {
        Ok(Self {
            http: build_http(config)?,
            api_url: config.api_url(),
            tokens,
        })
    }

    /// Creates a client from `RIO_*` environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn url(&self, path: &str, params: &Params) -> Result<Url, Error> {
        check_path(path)?;
        let url = Url::parse(&format!("{}{}{}", self.api_url, path, query_string(params)))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed for {}: {}", path, e);
                e
            })?;
        Ok(url)
    }

    /// Sends one request, retrying once with a fresh token if the service
    /// answers 401 and the token provider can log in again.
    async fn dispatch(
        &self,
        method: &Method,
        url: &Url,
        body: Option<&Value>,
    ) -> Result<reqwest::Response, Error> {
        let mut token = self.tokens.token().await?;
        let mut retried = false;
        loop {
            tracing::debug!("{} {}", method, url);
            let mut request = self
                .http
                .request(method.clone(), url.clone())
                .bearer_auth(&token);
            if let Some(body) = body {
                request = request
                    .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                    .body(body.to_string());
            }
            let response = request.send().await.map_err(|e| {
                tracing::warn!("{} {} failed: {}", method, url, e);
                Error::transport(method.clone(), url.as_str(), e)
            })?;

            if response.status() != StatusCode::UNAUTHORIZED || retried {
                return Ok(response);
            }
            if !self.tokens.invalidate(&token).await {
                return Ok(response);
            }
            tracing::warn!("{} {} was rejected with 401, logging in again", method, url);
            token = self.tokens.token().await?;
            retried = true;
        }
    }

    async fn execute<T, B>(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        body: Option<&B>,
    ) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path, params)?;
        let body = body.map(encode_body).transpose()?;
        let response = self.dispatch(&method, &url, body.as_ref()).await?;
        read_response(method, url.as_str(), response).await
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<Response<T>, Error> {
        self.execute::<T, EmptyRequest>(Method::GET, path, params, None)
            .await
    }

    pub(crate) async fn post<T, B>(
        &self,
        path: &str,
        params: &Params,
        body: &B,
    ) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, params, Some(body)).await
    }

    pub(crate) async fn put<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, &[], Some(body)).await
    }

    pub(crate) async fn delete(
        &self,
        path: &str,
        params: &Params,
    ) -> Result<Response<EmptyResponse>, Error> {
        self.execute::<EmptyResponse, EmptyRequest>(Method::DELETE, path, params, None)
            .await
    }

    /// `true` for 200 or 204, `false` for any other status. Only failures
    /// without a response are errors.
    pub(crate) async fn head(&self, path: &str) -> Result<bool, Error> {
        let url = self.url(path, &[])?;
        let response = self.dispatch(&Method::HEAD, &url, None).await?;
        let status = response.status();
        tracing::debug!("HEAD {} -> {}", url, status);
        Ok(matches!(status, StatusCode::OK | StatusCode::NO_CONTENT))
    }

    /// Partial update: `true` on success, `false` on 404, an error otherwise.
    pub(crate) async fn patch<B>(&self, path: &str, body: &B) -> Result<bool, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path, &[])?;
        let body = encode_body(body)?;
        let response = self.dispatch(&Method::PATCH, &url, Some(&body)).await?;
        match response.status() {
            status if status.is_success() => Ok(true),
            StatusCode::NOT_FOUND => Ok(false),
            status => {
                tracing::warn!("PATCH {} failed with status {}", url, status);
                Err(failure(Method::PATCH, url.as_str(), status, response).await)
            }
        }
    }
}

fn build_http(config: &ClientConfig) -> Result<reqwest::Client, Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.timeout)
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build HTTP client: {}", e);
            Error::Config(format!("failed to build HTTP client: {}", e))
        })
}

/// Builds the error for a non-success response. A body that cannot be read
/// leaves the read error's text as the message.
async fn failure(
    method: Method,
    url: &str,
    status: StatusCode,
    response: reqwest::Response,
) -> Error {
    match response.text().await {
        Ok(body) => Error::http(method, url, status.as_u16(), &body, None),
        Err(e) => {
            tracing::warn!("Failed to read {} {} error body: {}", method, url, e);
            Error::http(method, url, status.as_u16(), "", Some(&e.to_string()))
        }
    }
}

/// Turns a response into the expected type, stamped with its status, or into
/// an [`Error::Http`] carrying the decoded error body.
pub(crate) async fn read_response<T: DeserializeOwned>(
    method: Method,
    url: &str,
    response: reqwest::Response,
) -> Result<Response<T>, Error> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("{} {} failed with status {}", method, url, status);
        return Err(failure(method, url, status, response).await);
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::transport(method.clone(), url, e))?;
    let text = if body.trim().is_empty() {
        EMPTY_BODY
    } else {
        body.as_str()
    };
    let data = serde_json::from_str::<T>(text).map_err(|e| {
        tracing::error!("Failed to parse {} {} response: {}", method, url, e);
        Error::Decode {
            method: method.clone(),
            url: url.to_string(),
            status: status.as_u16(),
            source: e,
        }
    })?;

    Ok(Response {
        status_code: status.as_u16(),
        data,
    })
}
