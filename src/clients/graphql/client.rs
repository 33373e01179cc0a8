//! GraphQL client implementation for the repeater.dev API.
//!
//! This module provides the [`GraphqlClient`] type for executing named
//! GraphQL operations against the configured endpoint.

use serde_json::{json, Value};

use crate::clients::graphql::GraphqlError;
use crate::clients::HttpClient;
use crate::config::{Endpoint, RepeaterConfig};

/// A named GraphQL operation.
///
/// `root` is the top-level field of the response `data` object that holds
/// the operation's result (e.g. `createJob` for the create mutation).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operation {
    /// The operation name declared in `document`.
    pub name: &'static str,
    /// The top-level response field.
    pub root: &'static str,
    /// The GraphQL document.
    pub document: &'static str,
}

/// GraphQL client for the repeater.dev API.
///
/// Each instance owns its own HTTP client built from a [`RepeaterConfig`].
/// Distinct instances never share state.
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client for the given configuration.
    ///
    /// This constructor is infallible; the configuration has already been
    /// validated.
    #[must_use]
    pub fn new(config: &RepeaterConfig) -> Self {
        Self {
            http_client: HttpClient::new(config),
        }
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        self.http_client.endpoint()
    }

    /// Executes `operation` with optional `variables`.
    ///
    /// # Returns
    ///
    /// The response's `data` object.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Http`] for network errors and non-2xx responses
    /// - [`GraphqlError::Graphql`] when the body carries a non-empty `errors` array
    /// - [`GraphqlError::MissingData`] when the body carries no `data` object
    pub async fn request(
        &self,
        operation: &Operation,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let mut body = json!({
            "query": operation.document,
            "operationName": operation.name,
        });
        if let Some(variables) = variables {
            body["variables"] = variables;
        }

        tracing::debug!(
            "Sending {} to {}",
            operation.name,
            self.http_client.endpoint()
        );

        let response = self.http_client.post_json(&body).await?;
        Self::extract_data(response.body)
    }

    /// Executes `operation` and returns only its root field.
    ///
    /// A `null` or missing root field comes back as [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Same as [`GraphqlClient::request`].
    pub async fn request_root(
        &self,
        operation: &Operation,
        variables: Option<Value>,
    ) -> Result<Value, GraphqlError> {
        let mut data = self.request(operation, variables).await?;
        Ok(data
            .get_mut(operation.root)
            .map(Value::take)
            .unwrap_or_default())
    }

    /// Pulls `data` out of a GraphQL response body.
    fn extract_data(mut body: Value) -> Result<Value, GraphqlError> {
        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            if !errors.is_empty() {
                let messages = errors
                    .iter()
                    .map(|error| {
                        error
                            .get("message")
                            .and_then(Value::as_str)
                            .map_or_else(|| error.to_string(), String::from)
                    })
                    .collect();
                return Err(GraphqlError::Graphql { messages });
            }
        }

        match body.get_mut("data").map(Value::take) {
            Some(data @ Value::Object(_)) => Ok(data),
            _ => Err(GraphqlError::MissingData),
        }
    }
}
