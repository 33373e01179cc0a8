//! GraphQL executor for the repeater.dev API.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that issues one named
//! [`Operation`] per call and returns the response's `data` object.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: Executes an [`Operation`] with optional variables
//! - [`GraphqlError`]: Error type for GraphQL operations
//! - [`Operation`]: A named GraphQL document and the root field it returns
//!
//! # Example
//!
//! ```rust,ignore
//! use repeater::clients::graphql::GraphqlClient;
//! use repeater::queries::JOB;
//! use serde_json::json;
//!
//! let client = GraphqlClient::new(&config);
//! let data = client.request(&JOB, Some(json!({ "name": "nightly" }))).await?;
//! println!("{}", data["job"]);
//! ```
//!
//! # Request Shape
//!
//! Every request is a `POST` with the JSON body
//! `{"query": ..., "operationName": ..., "variables": ...}`. `variables` is
//! omitted when the operation takes none.

mod client;
mod errors;

pub use client::{GraphqlClient, Operation};
pub use errors::GraphqlError;
