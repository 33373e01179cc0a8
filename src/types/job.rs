//! The [`Job`] domain object.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::clients::GraphqlClient;
use crate::config::RepeaterConfig;
use crate::error::RepeaterError;
use crate::params::{normalize_update, validate_update, Headers, JobParams};
use crate::queries;
use crate::types::record::{decode, parse_headers, parse_timestamp};
use crate::types::{ApplyMode, JobRecord, JobResult, JobResultRecord};

/// A scheduled HTTP callback.
///
/// A `Job` is a snapshot of server state plus its own transport handle,
/// built from the [`RepeaterConfig`] it carries. It is obtained from
/// [`Repeater`](crate::Repeater) (enqueue, list, fetch) or from
/// [`JobResult::job`].
///
/// # Lifecycle
///
/// - [`update`](Job::update) re-applies the server's response to this same
///   instance.
/// - [`delete`](Job::delete) marks the instance deleted. From then on every
///   operation fails with [`RepeaterError::ReadOnly`] without touching the
///   network.
///
/// The name is the remote key and never changes after construction.
///
/// # Concurrency
///
/// Mutating operations take `&mut self`, so two of them cannot run on the
/// same instance at once.
///
/// # Example
///
/// ```rust,ignore
/// use repeater::{JobParams, Repeater};
///
/// let client = Repeater::new("my-token", None)?;
/// let mut job = client.job("nightly-report").await?.expect("job exists");
///
/// job.update(&JobParams::default().enabled(false)).await?;
/// for result in job.results().await? {
///     println!("{:?} after {:?}ms", result.status(), result.duration());
/// }
/// job.delete().await?;
/// assert!(job.is_deleted());
/// ```
#[derive(Debug)]
pub struct Job {
    name: String,
    enabled: Option<bool>,
    body: Option<String>,
    endpoint: Option<String>,
    verb: Option<String>,
    headers: Option<Headers>,
    retryable: Option<bool>,
    run_at: Option<DateTime<Utc>>,
    run_every: Option<String>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    last_run_at: Option<DateTime<Utc>>,
    next_run_at: Option<DateTime<Utc>>,
    is_deleted: bool,
    config: RepeaterConfig,
    client: GraphqlClient,
}

// Verify Job is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Job>();
};

impl Job {
    /// Builds a job from a full server record.
    ///
    /// The record is authoritative: every field it does not carry is `None`.
    #[must_use]
    pub fn from_record(record: JobRecord, config: RepeaterConfig) -> Self {
        let client = GraphqlClient::new(&config);
        let mut job = Self {
            name: record.name.clone().unwrap_or_default(),
            enabled: None,
            body: None,
            endpoint: None,
            verb: None,
            headers: None,
            retryable: None,
            run_at: None,
            run_every: None,
            created_at: None,
            updated_at: None,
            last_run_at: None,
            next_run_at: None,
            is_deleted: false,
            config,
            client,
        };
        job.apply(record, ApplyMode::Replace);
        job
    }

    /// Applies a server record to this job and returns the same instance.
    ///
    /// The name is never changed. `headers` is parsed from its JSON string
    /// form and timestamps from ISO-8601; unparseable values are logged and
    /// treated as absent.
    pub fn apply(&mut self, record: JobRecord, mode: ApplyMode) -> &mut Self {
        mode.assign(&mut self.enabled, record.enabled);
        mode.assign(&mut self.body, record.body);
        mode.assign(&mut self.endpoint, record.endpoint);
        mode.assign(&mut self.verb, record.verb);
        mode.assign(&mut self.headers, parse_headers(record.headers.as_ref()));
        mode.assign(&mut self.retryable, record.retryable);
        mode.assign(&mut self.run_every, record.run_every);
        mode.assign(
            &mut self.run_at,
            parse_timestamp("runAt", record.run_at.as_deref()),
        );
        mode.assign(
            &mut self.created_at,
            parse_timestamp("createdAt", record.created_at.as_deref()),
        );
        mode.assign(
            &mut self.updated_at,
            parse_timestamp("updatedAt", record.updated_at.as_deref()),
        );
        mode.assign(
            &mut self.last_run_at,
            parse_timestamp("lastRunAt", record.last_run_at.as_deref()),
        );
        mode.assign(
            &mut self.next_run_at,
            parse_timestamp("nextRunAt", record.next_run_at.as_deref()),
        );
        self
    }

    /// Fetches a job by name. A job the service does not know is `Ok(None)`.
    pub(crate) async fn fetch(
        client: &GraphqlClient,
        config: &RepeaterConfig,
        name: &str,
    ) -> Result<Option<Self>, RepeaterError> {
        tracing::debug!("Fetching job {name}");

        let root = client
            .request_root(&queries::JOB, Some(json!({ "name": name })))
            .await
            .map_err(fetch_error)?;
        let record = decode::<JobRecord>(root).map_err(fetch_error)?;

        Ok(record.map(|record| Self::from_record(record, config.clone())))
    }

    /// Updates this job remotely and applies the response to it.
    ///
    /// Only the fields set on `params` are sent, together with this job's
    /// name; any name on `params` is ignored. The response is applied with
    /// [`RepeaterConfig::update_mode`].
    ///
    /// # Errors
    ///
    /// - [`RepeaterError::ReadOnly`] if the job has been deleted
    /// - [`RepeaterError::Parameter`] if a set field is malformed
    /// - [`RepeaterError::Update`] if the request fails
    pub async fn update(&mut self, params: &JobParams) -> Result<&mut Self, RepeaterError> {
        self.ensure_writable()?;
        validate_update(params)?;

        let mut variables = Map::new();
        variables.insert("name".to_string(), Value::String(self.name.clone()));
        variables.extend(normalize_update(params));

        tracing::debug!("Updating job {}", self.name);

        let root = self
            .client
            .request_root(&queries::UPDATE, Some(Value::Object(variables)))
            .await
            .map_err(update_error)?;
        let record = decode::<JobRecord>(root)
            .map_err(update_error)?
            .ok_or_else(|| update_error(format!("job '{}' was not returned", self.name)))?;

        let mode = self.config.update_mode();
        Ok(self.apply(record, mode))
    }

    /// Deletes this job remotely and marks it deleted.
    ///
    /// # Errors
    ///
    /// - [`RepeaterError::ReadOnly`] if the job has already been deleted
    /// - [`RepeaterError::Delete`] if the request fails
    pub async fn delete(&mut self) -> Result<&mut Self, RepeaterError> {
        self.ensure_writable()?;

        tracing::debug!("Deleting job {}", self.name);

        self.client
            .request_root(&queries::DELETE, Some(json!({ "name": self.name })))
            .await
            .map_err(|error| RepeaterError::Delete {
                message: error.to_string(),
            })?;

        self.is_deleted = true;
        Ok(self)
    }

    /// Lists the recorded executions of this job.
    ///
    /// # Errors
    ///
    /// - [`RepeaterError::ReadOnly`] if the job has been deleted
    /// - [`RepeaterError::Results`] if the request fails
    pub async fn results(&self) -> Result<Vec<JobResult>, RepeaterError> {
        self.ensure_writable()?;

        let root = self
            .client
            .request_root(&queries::RESULTS, Some(json!({ "jobName": self.name })))
            .await
            .map_err(results_error)?;
        let records = decode::<Vec<JobResultRecord>>(root)
            .map_err(results_error)?
            .unwrap_or_default();

        tracing::debug!("Fetched {} results for job {}", records.len(), self.name);

        Ok(records
            .into_iter()
            .map(|record| JobResult::from_record(record, &self.name, self.config.clone()))
            .collect())
    }

    const fn ensure_writable(&self) -> Result<(), RepeaterError> {
        if self.is_deleted {
            Err(RepeaterError::ReadOnly)
        } else {
            Ok(())
        }
    }

    /// Returns the job name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns whether the job is enabled.
    #[must_use]
    pub const fn enabled(&self) -> Option<bool> {
        self.enabled
    }

    /// Returns the request body sent on each run.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the URL invoked on each run.
    #[must_use]
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Returns the HTTP verb.
    #[must_use]
    pub fn verb(&self) -> Option<&str> {
        self.verb.as_deref()
    }

    /// Returns the request headers.
    #[must_use]
    pub const fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Returns whether failed runs are retried.
    #[must_use]
    pub const fn retryable(&self) -> Option<bool> {
        self.retryable
    }

    /// Returns the first run time.
    #[must_use]
    pub const fn run_at(&self) -> Option<DateTime<Utc>> {
        self.run_at
    }

    /// Returns the recurrence interval.
    #[must_use]
    pub fn run_every(&self) -> Option<&str> {
        self.run_every.as_deref()
    }

    /// Returns when the job was created.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns when the job was last modified.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns when the job last ran.
    #[must_use]
    pub const fn last_run_at(&self) -> Option<DateTime<Utc>> {
        self.last_run_at
    }

    /// Returns when the job runs next.
    #[must_use]
    pub const fn next_run_at(&self) -> Option<DateTime<Utc>> {
        self.next_run_at
    }

    /// Returns `true` once [`delete`](Job::delete) has succeeded.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.is_deleted
    }

    /// Returns the configuration this job carries.
    #[must_use]
    pub const fn config(&self) -> &RepeaterConfig {
        &self.config
    }
}

pub(crate) fn fetch_error(error: impl std::fmt::Display) -> RepeaterError {
    RepeaterError::Fetch {
        message: error.to_string(),
    }
}

fn update_error(error: impl std::fmt::Display) -> RepeaterError {
    RepeaterError::Update {
        message: error.to_string(),
    }
}

fn results_error(error: impl std::fmt::Display) -> RepeaterError {
    RepeaterError::Results {
        message: error.to_string(),
    }
}
