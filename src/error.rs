//! Error types for the Repeater SDK.
//!
//! Every public operation returns [`RepeaterError`], a single root error type.
//! Parameter and read-only failures are raised locally before any network
//! call. All other variants wrap the transport failure message of the
//! operation that produced them.
//!
//! Configuration constructors return [`ConfigError`], which converts into
//! [`RepeaterError::Parameter`].
//!
//! # Example
//!
//! ```rust
//! use repeater::{ErrorKind, RepeaterError};
//!
//! let error = RepeaterError::Parameter {
//!     field: "name",
//!     reason: "is required".to_string(),
//! };
//! assert_eq!(error.to_string(), "Parameter error: name is required");
//! assert_eq!(error.kind(), ErrorKind::Parameter);
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`RepeaterConfig`](crate::RepeaterConfig).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid repeater.dev API token.")]
    EmptyAccessToken,

    /// The endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Please provide an http(s) URL (e.g., 'https://api.repeater.dev/graphql').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

/// The category of a [`RepeaterError`].
///
/// Useful at presentation boundaries where an exhaustive `match` on the
/// category is easier than matching on every variant's payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller supplied invalid or missing input.
    Parameter,
    /// A mutation or navigation was attempted on a deleted job.
    ReadOnly,
    /// Creating a job failed remotely.
    Create,
    /// Listing jobs failed remotely.
    List,
    /// Fetching a single job failed remotely.
    Fetch,
    /// Updating a job failed remotely.
    Update,
    /// Deleting a job failed remotely.
    Delete,
    /// Listing a job's results failed remotely.
    Results,
}

/// Errors returned by the Repeater SDK.
///
/// No variant is retried internally. A job that does not exist is not an
/// error: [`Repeater::job`](crate::Repeater::job) returns `Ok(None)` instead.
///
/// # Example
///
/// ```rust,ignore
/// use repeater::{Repeater, RepeaterError};
///
/// match client.jobs().await {
///     Ok(jobs) => println!("{} jobs", jobs.len()),
///     Err(RepeaterError::List { message }) => eprintln!("remote failure: {message}"),
///     Err(other) => eprintln!("{other}"),
/// }
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepeaterError {
    /// A parameter is missing or malformed.
    #[error("Parameter error: {field} {reason}")]
    Parameter {
        /// The name of the offending parameter, as it appears on the wire.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The job has been deleted and no longer accepts operations.
    #[error("Job is read-only and cannot be changed after deletion")]
    ReadOnly,

    /// The create-job mutation failed.
    #[error("Could not create job: {message}")]
    Create {
        /// The transport failure message.
        message: String,
    },

    /// The list-jobs query failed.
    #[error("Could not list jobs: {message}")]
    List {
        /// The transport failure message.
        message: String,
    },

    /// The get-job query failed.
    #[error("Could not fetch job: {message}")]
    Fetch {
        /// The transport failure message.
        message: String,
    },

    /// The update-job mutation failed.
    #[error("Could not update job: {message}")]
    Update {
        /// The transport failure message.
        message: String,
    },

    /// The delete-job mutation failed.
    #[error("Could not delete job: {message}")]
    Delete {
        /// The transport failure message.
        message: String,
    },

    /// The list-results query failed.
    #[error("Could not list job results: {message}")]
    Results {
        /// The transport failure message.
        message: String,
    },
}

impl RepeaterError {
    /// Builds a parameter error for `field`.
    pub(crate) fn parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Parameter {
            field,
            reason: reason.into(),
        }
    }

    /// Returns the category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parameter { .. } => ErrorKind::Parameter,
            Self::ReadOnly => ErrorKind::ReadOnly,
            Self::Create { .. } => ErrorKind::Create,
            Self::List { .. } => ErrorKind::List,
            Self::Fetch { .. } => ErrorKind::Fetch,
            Self::Update { .. } => ErrorKind::Update,
            Self::Delete { .. } => ErrorKind::Delete,
            Self::Results { .. } => ErrorKind::Results,
        }
    }

    /// Returns the parameter name for [`RepeaterError::Parameter`] errors.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Parameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

impl From<ConfigError> for RepeaterError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::EmptyAccessToken | ConfigError::MissingRequiredField { field: "token" } => {
                Self::parameter("token", "is required")
            }
            ConfigError::InvalidEndpoint { .. } => {
                Self::parameter("options.endpoint", "must look like a URL")
            }
            ConfigError::MissingRequiredField { field } => Self::parameter(field, "is required"),
        }
    }
}
