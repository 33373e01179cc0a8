//! Pre-flight validation of job parameters.
//!
//! Checks run in a fixed order and stop at the first failure, so callers
//! always get exactly one [`RepeaterError::Parameter`] to act on.

use crate::error::RepeaterError;
use crate::params::{Duration, JobParams, Verb};

/// Reason reported for a missing `name` or `endpoint`.
pub const REQUIRED: &str = "is required";
/// Reason reported for a malformed `endpoint`.
pub const URL_FORMAT: &str = "must look like a URL";
/// Reason reported for a `runAt` that is not a timestamp.
pub const DATE_FORMAT: &str = "must be a Date";
/// Reason reported for a `runEvery` that is not a duration.
pub const DURATION_FORMAT: &str = "must be an ISO8601 Duration string";
/// Reason reported for a header map holding a non-string value.
pub const HEADERS_FORMAT: &str = "must map names to strings";

/// Validates the parameters of a job to be created.
///
/// Order: `name` present and non-empty, `verb` a supported verb, `endpoint`
/// present, `endpoint` starting with `http://` or `https://`, `runAt` a
/// timestamp (if set), `runEvery` an ISO-8601 duration (if set), every
/// `headers` value a string (if set).
///
/// # Errors
///
/// Returns [`RepeaterError::Parameter`] naming the first offending field.
///
/// # Example
///
/// ```rust
/// use repeater::params::validate;
/// use repeater::JobParams;
///
/// let error = validate(&JobParams::default()).unwrap_err();
/// assert_eq!(error.to_string(), "Parameter error: name is required");
/// ```
pub fn validate(params: &JobParams) -> Result<(), RepeaterError> {
    if params.name.as_deref().map_or(true, str::is_empty) {
        return Err(RepeaterError::parameter("name", REQUIRED));
    }

    check_verb(params.verb.as_deref().unwrap_or_default())?;

    let endpoint = params
        .endpoint
        .as_deref()
        .filter(|endpoint| !endpoint.is_empty())
        .ok_or_else(|| RepeaterError::parameter("endpoint", REQUIRED))?;
    check_endpoint(endpoint)?;

    check_schedule(params)?;
    check_headers(params)
}

/// Validates the parameters of a job update.
///
/// Nothing is required; each field that is set must satisfy the same format
/// rule [`validate`] applies to it.
///
/// # Errors
///
/// Returns [`RepeaterError::Parameter`] naming the first offending field.
pub fn validate_update(params: &JobParams) -> Result<(), RepeaterError> {
    if let Some(verb) = params.verb.as_deref() {
        check_verb(verb)?;
    }
    if let Some(endpoint) = params.endpoint.as_deref() {
        check_endpoint(endpoint)?;
    }
    check_schedule(params)?;
    check_headers(params)
}

fn check_verb(verb: &str) -> Result<(), RepeaterError> {
    verb.parse::<Verb>()
        .map(drop)
        .map_err(|_| RepeaterError::parameter("verb", format!("must be one of {}", Verb::list())))
}

fn check_endpoint(endpoint: &str) -> Result<(), RepeaterError> {
    if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
        Ok(())
    } else {
        Err(RepeaterError::parameter("endpoint", URL_FORMAT))
    }
}

fn check_schedule(params: &JobParams) -> Result<(), RepeaterError> {
    if let Some(run_at) = &params.run_at {
        if run_at.resolve().is_none() {
            return Err(RepeaterError::parameter("runAt", DATE_FORMAT));
        }
    }

    if let Some(run_every) = params.run_every.as_deref() {
        if run_every.parse::<Duration>().is_err() {
            return Err(RepeaterError::parameter("runEvery", DURATION_FORMAT));
        }
    }

    Ok(())
}

fn check_headers(params: &JobParams) -> Result<(), RepeaterError> {
    match &params.headers {
        Some(headers) if !headers.values().all(serde_json::Value::is_string) => {
            Err(RepeaterError::parameter("headers", HEADERS_FORMAT))
        }
        _ => Ok(()),
    }
}
