//! Transport layer for repeater.dev API communication.
//!
//! This module provides the HTTP and GraphQL plumbing the domain types are
//! built on. Nothing here knows about jobs; it only moves JSON.
//!
//! # Overview
//!
//! - [`HttpClient`]: Async HTTP client with bearer authentication
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpError`]: HTTP-level failures (network, non-2xx)
//! - [`graphql::GraphqlClient`]: Executes named GraphQL operations
//! - [`graphql::GraphqlError`]: GraphQL-level failures
//!
//! # Retry Behavior
//!
//! None. Every request is attempted exactly once; retry policy belongs to
//! the caller or to the remote service.

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_response::HttpResponse;

pub use graphql::{GraphqlClient, GraphqlError, Operation};
