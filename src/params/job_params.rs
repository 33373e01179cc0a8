//! Caller-supplied job options.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

/// A header map. Keys keep their insertion order on the wire.
///
/// Values must be strings; [`validate`](crate::params::validate) rejects
/// anything else.
pub type Headers = Map<String, Value>;

/// When a job should first run.
///
/// Either an exact timestamp or a raw string that must parse as RFC 3339.
/// Raw strings are checked by [`validate`](crate::params::validate) before
/// anything is sent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunAt {
    /// A timestamp.
    At(DateTime<Utc>),
    /// A string to be parsed as an RFC 3339 timestamp.
    Raw(String),
}

impl RunAt {
    /// Returns the timestamp, or `None` for a raw string that does not parse.
    #[must_use]
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(at) => Some(*at),
            Self::Raw(raw) => DateTime::parse_from_rfc3339(raw.trim())
                .ok()
                .map(|at| at.with_timezone(&Utc)),
        }
    }

    /// Returns the wire form: RFC 3339, UTC, millisecond precision.
    ///
    /// Unparseable raw strings are returned unchanged.
    #[must_use]
    pub fn to_wire(&self) -> String {
        match self {
            Self::At(at) => format_timestamp(at),
            Self::Raw(raw) => self
                .resolve()
                .map_or_else(|| raw.clone(), |at| format_timestamp(&at)),
        }
    }
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS.sssZ`.
#[must_use]
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl From<DateTime<Utc>> for RunAt {
    fn from(at: DateTime<Utc>) -> Self {
        Self::At(at)
    }
}

impl From<&str> for RunAt {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for RunAt {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

/// Options for creating or updating a job.
///
/// Every field is optional at the type level; which ones are required
/// depends on the operation. [`Repeater::enqueue`](crate::Repeater::enqueue)
/// requires `name`, `verb` and `endpoint`. [`Job::update`](crate::Job::update)
/// requires nothing and sends only what is set.
///
/// | field | wire name | notes |
/// |---|---|---|
/// | `name` | `name` | unique job identifier |
/// | `verb` | `verb` | case-insensitive, sent uppercase |
/// | `endpoint` | `endpoint` | must start with `http://` or `https://` |
/// | `enabled` | `enabled` | defaults to `true` on create |
/// | `retryable` | `retryable` | defaults to `true` on create |
/// | `run_at` | `runAt` | defaults to now on create |
/// | `run_every` | `runEvery` | ISO-8601 duration; absent means one-shot |
/// | `headers` | `headers` | sent as a JSON string |
/// | `body` | `body` | raw request body |
/// | `json` | (none) | serialized into `body` when `body` is unset |
///
/// # Example
///
/// ```rust
/// use repeater::JobParams;
/// use serde_json::json;
///
/// let params = JobParams::default()
///     .name("nightly-report")
///     .verb("post")
///     .endpoint("https://example.com/hooks/report")
///     .header("X-Token", "secret")
///     .json(json!({"kind": "nightly"}))
///     .run_every("P1D");
///
/// assert_eq!(params.name.as_deref(), Some("nightly-report"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct JobParams {
    /// Unique job name.
    pub name: Option<String>,
    /// HTTP verb to invoke.
    pub verb: Option<String>,
    /// URL to invoke.
    pub endpoint: Option<String>,
    /// Whether the job is active.
    pub enabled: Option<bool>,
    /// Whether failed runs are retried by the service.
    pub retryable: Option<bool>,
    /// First run time.
    pub run_at: Option<RunAt>,
    /// Recurrence interval as an ISO-8601 duration.
    pub run_every: Option<String>,
    /// Request headers.
    pub headers: Option<Headers>,
    /// Raw request body.
    pub body: Option<String>,
    /// Structured body, serialized to JSON when `body` is unset.
    pub json: Option<Value>,
}

impl JobParams {
    /// Sets the job name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the HTTP verb.
    #[must_use]
    pub fn verb(mut self, verb: impl Into<String>) -> Self {
        self.verb = Some(verb.into());
        self
    }

    /// Sets the URL to invoke.
    #[must_use]
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets whether the job is enabled.
    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    /// Sets whether failed runs are retried.
    #[must_use]
    pub const fn retryable(mut self, retryable: bool) -> Self {
        self.retryable = Some(retryable);
        self
    }

    /// Sets the first run time.
    #[must_use]
    pub fn run_at(mut self, run_at: impl Into<RunAt>) -> Self {
        self.run_at = Some(run_at.into());
        self
    }

    /// Sets the recurrence interval.
    #[must_use]
    pub fn run_every(mut self, run_every: impl Into<String>) -> Self {
        self.run_every = Some(run_every.into());
        self
    }

    /// Adds a single header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Map::new)
            .insert(key.into(), Value::String(value.into()));
        self
    }

    /// Replaces the header map.
    #[must_use]
    pub fn headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the raw body.
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets a structured body.
    #[must_use]
    pub fn json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_run_at_resolves_rfc3339_strings() {
        let run_at = RunAt::from("2020-01-01T12:00:00+02:00");
        assert_eq!(
            run_at.resolve(),
            Some(Utc.with_ymd_and_hms(2020, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(run_at.to_wire(), "2020-01-01T10:00:00.000Z");
    }

    #[test]
    fn test_run_at_rejects_arbitrary_strings() {
        assert_eq!(RunAt::from("tomorrow-ish").resolve(), None);
        assert_eq!(RunAt::from("tomorrow-ish").to_wire(), "tomorrow-ish");
    }

    #[test]
    fn test_run_at_timestamp_wire_form() {
        let at = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(RunAt::from(at).to_wire(), "2020-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_header_builder_keeps_insertion_order() {
        let params = JobParams::default().header("X-B", "2").header("X-A", "1");
        let keys: Vec<&String> = params.headers.as_ref().unwrap().keys().collect();
        assert_eq!(keys, vec!["X-B", "X-A"]);
    }

    #[test]
    fn test_builder_sets_every_field() {
        let params = JobParams::default()
            .name("job")
            .verb("get")
            .endpoint("http://test.host")
            .enabled(false)
            .retryable(false)
            .run_every("PT1H")
            .body("x");

        assert_eq!(params.name.as_deref(), Some("job"));
        assert_eq!(params.verb.as_deref(), Some("get"));
        assert_eq!(params.endpoint.as_deref(), Some("http://test.host"));
        assert_eq!(params.enabled, Some(false));
        assert_eq!(params.retryable, Some(false));
        assert_eq!(params.run_every.as_deref(), Some("PT1H"));
        assert_eq!(params.body.as_deref(), Some("x"));
        assert!(params.json.is_none());
    }
}
