//! The [`Repeater`] entry point.

use serde_json::Value;

use crate::clients::GraphqlClient;
use crate::config::{RepeaterConfig, RepeaterOptions};
use crate::error::RepeaterError;
use crate::params::{normalize, validate, JobParams};
use crate::queries;
use crate::types::record::decode;
use crate::types::{Job, JobRecord};

/// Client for the repeater.dev job-scheduling API.
///
/// Each public operation runs the same pipeline: validate the caller's
/// input, shape it into request variables, issue one GraphQL request, and
/// wrap the response in domain objects that carry this client's
/// configuration.
///
/// # Thread Safety
///
/// `Repeater` is `Send + Sync`. Independent operations may run concurrently
/// from several tasks; the client imposes no ordering between them.
///
/// # Example
///
/// ```rust,ignore
/// use repeater::{JobParams, Repeater};
/// use serde_json::json;
///
/// let client = Repeater::new("my-token", None)?;
///
/// let job = client
///     .enqueue(
///         &JobParams::default()
///             .name("nightly-report")
///             .verb("post")
///             .endpoint("https://example.com/hooks/report")
///             .json(json!({"kind": "nightly"}))
///             .run_every("P1D"),
///     )
///     .await?;
///
/// println!("next run: {:?}", job.next_run_at());
/// ```
#[derive(Debug)]
pub struct Repeater {
    config: RepeaterConfig,
    client: GraphqlClient,
}

// Verify Repeater is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Repeater>();
};

impl Repeater {
    /// Creates a client from a token and optional loose options.
    ///
    /// # Errors
    ///
    /// Returns [`RepeaterError::Parameter`] for `token` if it is empty, and for
    /// `options.endpoint` if the endpoint is not an http(s) URL.
    ///
    /// # Example
    ///
    /// ```rust
    /// use repeater::{Repeater, RepeaterOptions};
    ///
    /// let client = Repeater::new(
    ///     "my-token",
    ///     Some(RepeaterOptions::default().endpoint("http://localhost:3000/graphql")),
    /// )
    /// .unwrap();
    /// assert_eq!(client.config().endpoint().as_ref(), "http://localhost:3000/graphql");
    ///
    /// let error = Repeater::new("", None).unwrap_err();
    /// assert_eq!(error.to_string(), "Parameter error: token is required");
    /// ```
    pub fn new(token: &str, options: Option<RepeaterOptions>) -> Result<Self, RepeaterError> {
        let config = options.unwrap_or_default().into_config(token)?;
        Ok(Self::with_config(config))
    }

    /// Creates a client from a fully built [`RepeaterConfig`].
    #[must_use]
    pub fn with_config(config: RepeaterConfig) -> Self {
        let client = GraphqlClient::new(&config);
        Self { config, client }
    }

    /// Returns the configuration carried into every derived object.
    #[must_use]
    pub const fn config(&self) -> &RepeaterConfig {
        &self.config
    }

    /// Creates a job.
    ///
    /// `name`, `verb` and `endpoint` are required. `enabled` and `retryable`
    /// default to `true`, `runAt` to now. A `json` value is sent as the body
    /// with `Content-Type: application/json` unless `body` is set.
    ///
    /// # Errors
    ///
    /// - [`RepeaterError::Parameter`] for the first invalid field, before any
    ///   request is made
    /// - [`RepeaterError::Create`] if the request fails
    pub async fn enqueue(&self, params: &JobParams) -> Result<Job, RepeaterError> {
        validate(params)?;
        let variables = normalize(params);

        tracing::debug!(
            "Enqueueing job {}",
            params.name.as_deref().unwrap_or_default()
        );

        let root = self
            .client
            .request_root(&queries::CREATE, Some(Value::Object(variables)))
            .await
            .map_err(create_error)?;
        let record = decode::<JobRecord>(root)
            .map_err(create_error)?
            .ok_or_else(|| create_error("no job was returned"))?;

        Ok(Job::from_record(record, self.config.clone()))
    }

    /// Lists every job.
    ///
    /// # Errors
    ///
    /// Returns [`RepeaterError::List`] if the request fails.
    pub async fn jobs(&self) -> Result<Vec<Job>, RepeaterError> {
        let root = self
            .client
            .request_root(&queries::JOBS, None)
            .await
            .map_err(list_error)?;
        let records = decode::<Vec<JobRecord>>(root)
            .map_err(list_error)?
            .unwrap_or_default();

        tracing::debug!("Fetched {} jobs", records.len());

        Ok(records
            .into_iter()
            .map(|record| Job::from_record(record, self.config.clone()))
            .collect())
    }

    /// Fetches a job by name.
    ///
    /// A job that does not exist is `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RepeaterError::Fetch`] if the request fails.
    pub async fn job(&self, name: &str) -> Result<Option<Job>, RepeaterError> {
        Job::fetch(&self.client, &self.config, name).await
    }

    /// Updates the job named by `params` if it exists, otherwise creates it.
    ///
    /// `params` is validated as for [`enqueue`](Repeater::enqueue) before any
    /// request is made.
    ///
    /// # Errors
    ///
    /// - [`RepeaterError::Parameter`] for the first invalid field
    /// - [`RepeaterError::Fetch`] if looking up the job fails
    /// - [`RepeaterError::Update`] or [`RepeaterError::Create`] if the
    ///   following request fails
    pub async fn enqueue_or_update(&self, params: &JobParams) -> Result<Job, RepeaterError> {
        validate(params)?;
        let name = params.name.as_deref().unwrap_or_default();

        match self.job(name).await? {
            Some(mut job) => {
                job.update(params).await?;
                Ok(job)
            }
            None => self.enqueue(params).await,
        }
    }
}

fn create_error(error: impl std::fmt::Display) -> RepeaterError {
    RepeaterError::Create {
        message: error.to_string(),
    }
}

fn list_error(error: impl std::fmt::Display) -> RepeaterError {
    RepeaterError::List {
        message: error.to_string(),
    }
}
