//! Error types for the API client.

use reqwest::Method;

use crate::error_message::ErrorMessage;

/// Status reported for failures that never produced an HTTP response.
pub(crate) const NO_RESPONSE_STATUS: u16 = 400;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed before a response was received (DNS, TLS,
    /// connection reset, timeout).
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        source: reqwest::Error,
        /// Default message built from the underlying cause.
        error: ErrorMessage,
    },
    /// The service answered with a non-success status.
    #[error("{method} {url} returned {status}: {}", .error.message())]
    Http {
        method: Method,
        url: String,
        status: u16,
        error: ErrorMessage,
        /// Raw response body, truncated.
        body: String,
    },
    /// A success response whose body did not match the expected type.
    #[error("failed to decode {method} {url} response (status {status}): {source}")]
    Decode {
        method: Method,
        url: String,
        status: u16,
        source: serde_json::Error,
    },
    /// The request payload could not be encoded to JSON.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A name resolved to a `.` or `..` path segment.
    #[error("invalid path segment in {0}")]
    InvalidPath(String),
    /// Missing or malformed client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn transport(method: Method, url: &str, source: reqwest::Error) -> Self {
        let error = ErrorMessage::fallback(NO_RESPONSE_STATUS, Some(&source.to_string()));
        Error::Transport {
            method,
            url: url.to_string(),
            source,
            error,
        }
    }

    pub(crate) fn http(
        method: Method,
        url: &str,
        status: u16,
        body: &str,
        fallback: Option<&str>,
    ) -> Self {
        Error::Http {
            method,
            url: url.to_string(),
            status,
            error: ErrorMessage::decode(status, body, fallback),
            body: truncate_body(body),
        }
    }

    /// HTTP status of the failed call. Failures without a response report 400.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Http { status, .. } | Error::Decode { status, .. } => *status,
            _ => NO_RESPONSE_STATUS,
        }
    }

    /// The decoded service error, if the failure carries one.
    pub fn error_message(&self) -> Option<&ErrorMessage> {
        match self {
            Error::Transport { error, .. } | Error::Http { error, .. } => Some(error),
            _ => None,
        }
    }

    /// The service supplied message, or this error's own description.
    pub fn message(&self) -> String {
        match self.error_message() {
            Some(error) => error.message().to_string(),
            None => self.to_string(),
        }
    }

    /// `true` when the service answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Http { status: 404, .. })
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_decodes_body() {
        let err = Error::http(
            Method::GET,
            "https://rio/api/brokers/b1",
            404,
            r#"{"message":"broker not found","statusCode":404,"resourceName":"b1","resourceType":"broker"}"#,
            None,
        );
        assert!(err.is_not_found());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.message(), "broker not found");
        assert!(matches!(err.error_message(), Some(ErrorMessage::Resource(_))));
        assert_eq!(
            err.to_string(),
            "GET https://rio/api/brokers/b1 returned 404: broker not found"
        );
    }

    #[test]
    fn unreadable_body_keeps_read_error() {
        let err = Error::http(
            Method::GET,
            "https://rio/api/system",
            500,
            "",
            Some("error decoding response body"),
        );
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.message(), "error decoding response body");
        assert!(matches!(err, Error::Http { ref body, .. } if body.is_empty()));
    }

    #[test]
    fn config_error_has_default_status() {
        let err = Error::Config("RIO_ENDPOINT is not set".to_string());
        assert_eq!(err.status_code(), 400);
        assert!(err.error_message().is_none());
        assert_eq!(err.message(), "invalid configuration: RIO_ENDPOINT is not set");
    }

    #[test]
    fn truncate_long_body() {
        let body = "é".repeat(1500);
        let truncated = truncate_body(&body);
        assert!(truncated.ends_with("...[truncated]"));
        assert!(truncated.len() < body.len());
        assert_eq!(truncate_body("short"), "short");
    }
}
