//! Raw server records.
//!
//! Every field is optional: the service may omit fields from partial
//! responses, and `null` is treated the same as absent. Timestamps and
//! headers arrive as strings and are parsed leniently by the domain types.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::params::Headers;

/// A job as returned by the jobs, job, create and update operations.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobRecord {
    /// Unique job name.
    pub name: Option<String>,
    /// Whether the job is active.
    pub enabled: Option<bool>,
    /// Raw request body.
    pub body: Option<String>,
    /// URL invoked by the job.
    pub endpoint: Option<String>,
    /// HTTP verb.
    pub verb: Option<String>,
    /// Headers as a JSON string.
    pub headers: Option<Value>,
    /// Whether failed runs are retried.
    pub retryable: Option<bool>,
    /// First run time.
    pub run_at: Option<String>,
    /// Recurrence interval.
    pub run_every: Option<String>,
    /// Creation time.
    pub created_at: Option<String>,
    /// Last modification time.
    pub updated_at: Option<String>,
    /// Time of the most recent run.
    pub last_run_at: Option<String>,
    /// Time of the next scheduled run.
    pub next_run_at: Option<String>,
}

/// One execution of a job as returned by the job results operation.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct JobResultRecord {
    /// HTTP status returned by the endpoint.
    pub status: Option<u16>,
    /// Response headers as a JSON string.
    pub headers: Option<Value>,
    /// Response body.
    pub body: Option<String>,
    /// When the run happened.
    pub run_at: Option<String>,
    /// Attempt counter.
    pub run: Option<u32>,
    /// Run duration in milliseconds.
    pub duration: Option<u64>,
    /// Creation time.
    pub created_at: Option<String>,
    /// Last modification time.
    pub updated_at: Option<String>,
}

/// Decodes an operation's root field. `null` decodes to `None`.
pub(crate) fn decode<T: DeserializeOwned>(value: Value) -> Result<Option<T>, serde_json::Error> {
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value).map(Some)
}

/// Parses a `headers` field. Absent, empty and malformed values become `None`.
pub(crate) fn parse_headers(value: Option<&Value>) -> Option<Headers> {
    match value? {
        Value::Object(map) if !map.is_empty() => Some(map.clone()),
        Value::String(raw) if !raw.trim().is_empty() => {
            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) if !map.is_empty() => Some(map),
                Ok(Value::Object(_)) => None,
                _ => {
                    tracing::warn!("Ignoring headers that are not a JSON object: {raw}");
                    None
                }
            }
        }
        _ => None,
    }
}

/// Parses an ISO-8601 timestamp field. Absent, empty and malformed values
/// become `None`.
pub(crate) fn parse_timestamp(field: &str, value: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = value.map(str::trim).filter(|raw| !raw.is_empty())?;
    match DateTime::parse_from_rfc3339(raw) {
        Ok(at) => Some(at.with_timezone(&Utc)),
        Err(error) => {
            tracing::warn!("Ignoring unparseable {field} '{raw}': {error}");
            None
        }
    }
}
