//! GraphQL-specific error types for the Repeater SDK.
//!
//! Unlike a raw HTTP client, the GraphQL executor treats an `errors` array in
//! a 200 response as a failure: the repeater.dev API reports validation and
//! lookup failures that way.
//!
//! - [`GraphqlError::Http`]: Wraps underlying HTTP errors
//! - [`GraphqlError::Graphql`]: The response carried GraphQL errors
//! - [`GraphqlError::MissingData`]: The response carried neither data nor errors

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for GraphQL operations.
///
/// # Example
///
/// ```rust
/// use repeater::clients::graphql::GraphqlError;
///
/// let error = GraphqlError::Graphql {
///     messages: vec!["Mocked error response".to_string()],
/// };
/// assert_eq!(error.to_string(), "GraphQL Error: Mocked error response");
/// ```
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// An HTTP-level error occurred.
    ///
    /// This variant wraps [`HttpError`] for unified error handling.
    /// It includes network errors and non-2xx responses.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The response body contained a non-empty `errors` array.
    #[error("GraphQL Error: {}", messages.join("; "))]
    Graphql {
        /// The `message` of every reported error, in order.
        messages: Vec<String>,
    },

    /// The response body contained no `data` object.
    #[error("GraphQL Error: response did not contain any data")]
    MissingData,
}
