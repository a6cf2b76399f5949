//! Structured error bodies returned by the service on failed calls.
//!
//! The service does not tag its error bodies, so the concrete shape is
//! inferred by trying each known shape in turn. Every shape rejects unknown
//! fields: `{message, statusCode}` is a subset of all the others, so a loose
//! match would always pick the default shape.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Message used when a failure carries no decodable body and no cause.
const FALLBACK_MESSAGE: &str = "Error";

/// `{message, statusCode}`: the plain error shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultErrorMessage {
    pub message: String,
    pub status_code: u16,
}

/// Error about a named resource, e.g. a broker that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResourceErrorMessage {
    pub message: String,
    pub status_code: u16,
    pub resource_name: String,
    pub resource_type: String,
}

/// A request that failed field validation (HTTP 422).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationErrorMessage {
    pub message: String,
    pub status_code: u16,
    pub errors: Vec<ValidationDetail>,
}

/// One offending field inside a [`ValidationErrorMessage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ValidationDetail {
    pub field_name: String,
    pub field_type: String,
    pub error_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// The request body was sent with a media type the service does not accept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UnsupportedMediaErrorMessage {
    pub message: String,
    pub status_code: u16,
    pub supplied_media_type: String,
    pub supported_media_type: String,
}

/// A failure reported by a system the service talks to (a device, a bucket).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DownstreamErrorMessage {
    pub message: String,
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    pub resource_type: String,
    pub cause: String,
}

/// Decoded error body of a failed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorMessage {
    Default(DefaultErrorMessage),
    Resource(ResourceErrorMessage),
    Validation(ValidationErrorMessage),
    UnsupportedMedia(UnsupportedMediaErrorMessage),
    Downstream(DownstreamErrorMessage),
}

impl ErrorMessage {
    /// Decodes a failure body into the most specific shape it matches.
    ///
    /// Shapes are tried in the order resource, validation, unsupported media,
    /// downstream, default. A blank body, or one that matches no shape,
    /// becomes a default message with `status_code` and `fallback` (or
    /// `"Error"` when there is no fallback text).
    pub fn decode(status_code: u16, body: &str, fallback: Option<&str>) -> Self {
        if body.trim().is_empty() {
            return Self::fallback(status_code, fallback);
        }
        attempt(body, ErrorMessage::Resource)
            .or_else(|| attempt(body, ErrorMessage::Validation))
            .or_else(|| attempt(body, ErrorMessage::UnsupportedMedia))
            .or_else(|| attempt(body, ErrorMessage::Downstream))
            .or_else(|| attempt(body, ErrorMessage::Default))
            .unwrap_or_else(|| Self::fallback(status_code, fallback))
    }

    /// Default message used when nothing could be decoded.
    pub fn fallback(status_code: u16, message: Option<&str>) -> Self {
        ErrorMessage::Default(DefaultErrorMessage {
            message: message.unwrap_or(FALLBACK_MESSAGE).to_string(),
            status_code,
        })
    }

    /// The human readable message supplied by the service.
    pub fn message(&self) -> &str {
        match self {
            ErrorMessage::Default(e) => &e.message,
            ErrorMessage::Resource(e) => &e.message,
            ErrorMessage::Validation(e) => &e.message,
            ErrorMessage::UnsupportedMedia(e) => &e.message,
            ErrorMessage::Downstream(e) => &e.message,
        }
    }

    /// The status code reported inside the body.
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorMessage::Default(e) => e.status_code,
            ErrorMessage::Resource(e) => e.status_code,
            ErrorMessage::Validation(e) => e.status_code,
            ErrorMessage::UnsupportedMedia(e) => e.status_code,
            ErrorMessage::Downstream(e) => e.status_code,
        }
    }

    /// Per-field validation failures; empty for every other shape.
    pub fn validation_errors(&self) -> &[ValidationDetail] {
        match self {
            ErrorMessage::Validation(e) => &e.errors,
            _ => &[],
        }
    }
}

fn attempt<T: DeserializeOwned>(body: &str, wrap: fn(T) -> ErrorMessage) -> Option<ErrorMessage> {
    serde_json::from_str::<T>(body).ok().map(wrap)
}
