//! Configuration types for the Repeater SDK.
//!
//! This module provides the configuration carried by the client and by every
//! [`Job`](crate::Job) and [`JobResult`](crate::JobResult) derived from it.
//!
//! # Overview
//!
//! - [`RepeaterConfig`]: The immutable configuration (token, endpoint, options)
//! - [`RepeaterConfigBuilder`]: A builder for constructing [`RepeaterConfig`] instances
//! - [`RepeaterOptions`]: The loose options accepted by [`Repeater::new`](crate::Repeater::new)
//! - [`AccessToken`]: A validated API token with masked debug output
//! - [`Endpoint`]: A validated GraphQL endpoint URL
//!
//! # Example
//!
//! ```rust
//! use repeater::{AccessToken, RepeaterConfig, API_ENDPOINT};
//!
//! let config = RepeaterConfig::builder()
//!     .token(AccessToken::new("my-token").unwrap())
//!     .option("team", "ops")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.endpoint().as_ref(), API_ENDPOINT);
//! assert_eq!(config.options()["team"], "ops");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, Endpoint};

use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::params::merge;
use crate::types::ApplyMode;

/// The production GraphQL endpoint of repeater.dev.
pub const API_ENDPOINT: &str = "https://api.repeater.dev/graphql";

/// Configuration for the Repeater SDK.
///
/// Holds the credentials and the endpoint used to reach the service, the
/// [`ApplyMode`] used for update responses, and a passthrough bag of extra
/// options. The extra options are never interpreted by the SDK; they are
/// carried unchanged into every derived job and job result.
///
/// # Thread Safety
///
/// `RepeaterConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct RepeaterConfig {
    token: AccessToken,
    endpoint: Endpoint,
    user_agent_prefix: Option<String>,
    update_mode: ApplyMode,
    options: Map<String, Value>,
}

impl RepeaterConfig {
    /// Creates a new builder for constructing a `RepeaterConfig`.
    #[must_use]
    pub fn builder() -> RepeaterConfigBuilder {
        RepeaterConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &AccessToken {
        &self.token
    }

    /// Returns the GraphQL endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns how update responses are applied to an existing job.
    #[must_use]
    pub const fn update_mode(&self) -> ApplyMode {
        self.update_mode
    }

    /// Returns the passthrough options.
    #[must_use]
    pub const fn options(&self) -> &Map<String, Value> {
        &self.options
    }
}

// Verify RepeaterConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RepeaterConfig>();
};

/// Builder for constructing [`RepeaterConfig`] instances.
///
/// The only required field is `token`.
///
/// # Defaults
///
/// - `endpoint`: [`API_ENDPOINT`]
/// - `update_mode`: [`ApplyMode::Merge`]
/// - `user_agent_prefix`: `None`
/// - options: empty
#[derive(Debug, Default)]
pub struct RepeaterConfigBuilder {
    token: Option<AccessToken>,
    endpoint: Option<Endpoint>,
    user_agent_prefix: Option<String>,
    update_mode: Option<ApplyMode>,
    options: Map<String, Value>,
}

impl RepeaterConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: AccessToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the GraphQL endpoint.
    #[must_use]
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets how update responses are applied to an existing job.
    #[must_use]
    pub const fn update_mode(mut self, mode: ApplyMode) -> Self {
        self.update_mode = Some(mode);
        self
    }

    /// Adds a single passthrough option. `null` values are ignored.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut addition = Map::new();
        addition.insert(key.into(), value.into());
        self.options = merge(&self.options, &addition);
        self
    }

    /// Merges a bag of passthrough options over the ones already set.
    /// `null` values are ignored.
    #[must_use]
    pub fn options(mut self, options: &Map<String, Value>) -> Self {
        self.options = merge(&self.options, options);
        self
    }

    /// Builds the [`RepeaterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set.
    pub fn build(self) -> Result<RepeaterConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => Endpoint::new(API_ENDPOINT)?,
        };

        Ok(RepeaterConfig {
            token,
            endpoint,
            user_agent_prefix: self.user_agent_prefix,
            update_mode: self.update_mode.unwrap_or_default(),
            options: self.options,
        })
    }
}

/// Loose options accepted by [`Repeater::new`](crate::Repeater::new).
///
/// `endpoint` is the only recognized key. Everything in `extra` is passed
/// through untouched to every derived object.
///
/// # Example
///
/// ```rust
/// use repeater::RepeaterOptions;
///
/// let options = RepeaterOptions::default()
///     .endpoint("http://localhost:3000/graphql")
///     .extra("foo", "bar");
/// assert_eq!(options.endpoint.as_deref(), Some("http://localhost:3000/graphql"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RepeaterOptions {
    /// GraphQL endpoint URL. Defaults to [`API_ENDPOINT`].
    pub endpoint: Option<String>,
    /// Passthrough options.
    pub extra: Map<String, Value>,
}

impl RepeaterOptions {
    /// Sets the endpoint URL.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Adds a passthrough option.
    #[must_use]
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Resolves these options and `token` into a [`RepeaterConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] for an empty token and
    /// [`ConfigError::InvalidEndpoint`] for a malformed endpoint.
    pub fn into_config(self, token: &str) -> Result<RepeaterConfig, ConfigError> {
        let mut builder = RepeaterConfig::builder()
            .token(AccessToken::new(token)?)
            .options(&self.extra);
        if let Some(endpoint) = self.endpoint {
            builder = builder.endpoint(Endpoint::new(endpoint)?);
        }
        builder.build()
    }
}
