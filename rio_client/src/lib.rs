//! Typed client for the Rio storage orchestration REST API.
//!
//! [`Client`] maps each endpoint to an async method. Calls are authenticated
//! with a bearer token obtained by [`token::TokenProvider`], failures decode
//! into [`Error`] with a structured [`ErrorMessage`], and list endpoints share
//! the [`types::ListResult`] view for pagination.

mod client;
mod config;
mod encoding;
mod endpoints;
mod error_message;
mod errors;
mod pagination;
mod query;
pub mod token;
pub mod types;
mod user_agent;
pub use self::client::Client;
pub use self::config::{ClientConfig, DEFAULT_TIMEOUT};
pub use self::encoding::{encode_body, encode_path_segment, query_string};
pub use self::error_message::{
    DefaultErrorMessage, DownstreamErrorMessage, ErrorMessage, ResourceErrorMessage,
    UnsupportedMediaErrorMessage, ValidationDetail, ValidationErrorMessage,
};
pub use self::errors::Error;
pub use self::pagination::collect_pages;
pub use self::query::{
    JobQuery, ObjectQuery, ObjectSortBy, PageQuery, Query, QueryCommon, SortDirection,
};
