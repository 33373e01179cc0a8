//! The [`JobResult`] domain object.

use chrono::{DateTime, Utc};

use crate::clients::GraphqlClient;
use crate::config::RepeaterConfig;
use crate::error::RepeaterError;
use crate::params::Headers;
use crate::types::job::fetch_error;
use crate::types::record::{parse_headers, parse_timestamp};
use crate::types::{Job, JobResultRecord};

/// One recorded execution of a job.
///
/// Results are immutable. Each one remembers only the name of the job it
/// belongs to, plus the configuration needed to fetch that job again with
/// [`JobResult::job`].
#[derive(Clone, Debug)]
pub struct JobResult {
    status: Option<u16>,
    headers: Option<Headers>,
    body: Option<String>,
    run_at: Option<DateTime<Utc>>,
    run: Option<u32>,
    duration: Option<u64>,
    created_at: Option<DateTime<Utc>>,
    updated_at: Option<DateTime<Utc>>,
    job_name: String,
    config: RepeaterConfig,
}

impl JobResult {
    /// Builds a result of the job named `job_name` from a server record.
    #[must_use]
    pub fn from_record(
        record: JobResultRecord,
        job_name: impl Into<String>,
        config: RepeaterConfig,
    ) -> Self {
        Self {
            status: record.status,
            headers: parse_headers(record.headers.as_ref()),
            body: record.body,
            run_at: parse_timestamp("runAt", record.run_at.as_deref()),
            run: record.run,
            duration: record.duration,
            created_at: parse_timestamp("createdAt", record.created_at.as_deref()),
            updated_at: parse_timestamp("updatedAt", record.updated_at.as_deref()),
            job_name: job_name.into(),
            config,
        }
    }

    /// Fetches the job this result belongs to, as a fresh [`Job`].
    ///
    /// # Errors
    ///
    /// Returns [`RepeaterError::Fetch`] if the request fails or the job no
    /// longer exists.
    pub async fn job(&self) -> Result<Job, RepeaterError> {
        let client = GraphqlClient::new(&self.config);
        Job::fetch(&client, &self.config, &self.job_name)
            .await?
            .ok_or_else(|| fetch_error(format!("job '{}' not found", self.job_name)))
    }

    /// Returns the HTTP status the endpoint answered with.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Returns the response headers.
    #[must_use]
    pub const fn headers(&self) -> Option<&Headers> {
        self.headers.as_ref()
    }

    /// Returns the response body.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns when the run happened.
    #[must_use]
    pub const fn run_at(&self) -> Option<DateTime<Utc>> {
        self.run_at
    }

    /// Returns the attempt counter.
    #[must_use]
    pub const fn run(&self) -> Option<u32> {
        self.run
    }

    /// Returns the run duration in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> Option<u64> {
        self.duration
    }

    /// Returns when the result was recorded.
    #[must_use]
    pub const fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    /// Returns when the result was last modified.
    #[must_use]
    pub const fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// Returns the name of the job this result belongs to.
    #[must_use]
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// Returns the configuration this result carries.
    #[must_use]
    pub const fn config(&self) -> &RepeaterConfig {
        &self.config
    }
}
