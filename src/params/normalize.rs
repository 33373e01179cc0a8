//! Builds request variables from [`JobParams`].
//!
//! Both functions are pure: no I/O, and the clock is only read by
//! [`normalize`] to default `runAt`.

use chrono::{DateTime, Utc};
use serde_json::{json, Map, Value};

use crate::params::{format_timestamp, merge, JobParams};

const CONTENT_TYPE: &str = "Content-Type";
const APPLICATION_JSON: &str = "application/json";

/// Builds the create-job variables, defaulting `runAt` to now.
///
/// See [`normalize_at`].
#[must_use]
pub fn normalize(params: &JobParams) -> Map<String, Value> {
    normalize_at(params, Utc::now())
}

/// Builds the create-job variables with `now` as the default `runAt`.
///
/// 1. Defaults: `enabled: true`, `retryable: true`, `runAt: now`.
/// 2. Caller fields are merged over the defaults; unset fields never
///    override a default.
/// 3. `verb` is uppercased.
/// 4. When `body` is unset or empty and `json` is set, `body` becomes the
///    serialized `json` and `Content-Type: application/json` is merged over
///    the caller's headers. `json` itself is never sent.
/// 5. `headers` is serialized to a JSON string.
///
/// Unset `body` and `headers` are omitted entirely.
///
/// # Example
///
/// ```rust
/// use repeater::params::normalize;
/// use repeater::JobParams;
/// use serde_json::json;
///
/// let variables = normalize(&JobParams::default().verb("get").json(json!({"a": 1})));
///
/// assert_eq!(variables["verb"], "GET");
/// assert_eq!(variables["body"], r#"{"a":1}"#);
/// assert_eq!(variables["headers"], r#"{"Content-Type":"application/json"}"#);
/// assert!(!variables.contains_key("json"));
/// ```
#[must_use]
pub fn normalize_at(params: &JobParams, now: DateTime<Utc>) -> Map<String, Value> {
    let defaults = match json!({
        "enabled": true,
        "retryable": true,
        "runAt": format_timestamp(&now),
    }) {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    finish(merge(&defaults, &caller_fields(params)), params)
}

/// Builds the update-job variables: only the fields the caller set, with no
/// defaults. `name` is left out; the job's own name is the key.
///
/// Steps 3 to 5 of [`normalize_at`] apply unchanged.
#[must_use]
pub fn normalize_update(params: &JobParams) -> Map<String, Value> {
    let mut fields = caller_fields(params);
    fields.remove("name");
    finish(merge(&Map::new(), &fields), params)
}

/// Caller fields in wire form; unset fields become `null` so the merge drops them.
///
/// An empty header map counts as unset.
fn caller_fields(params: &JobParams) -> Map<String, Value> {
    let mut fields = Map::new();
    fields.insert("name".to_string(), json!(params.name));
    fields.insert("enabled".to_string(), json!(params.enabled));
    fields.insert("endpoint".to_string(), json!(params.endpoint));
    fields.insert("verb".to_string(), json!(params.verb));
    fields.insert(
        "headers".to_string(),
        json!(params.headers.as_ref().filter(|headers| !headers.is_empty())),
    );
    fields.insert("body".to_string(), json!(params.body));
    fields.insert("retryable".to_string(), json!(params.retryable));
    fields.insert(
        "runAt".to_string(),
        json!(params.run_at.as_ref().map(crate::params::RunAt::to_wire)),
    );
    fields.insert("runEvery".to_string(), json!(params.run_every));
    fields
}

fn finish(mut variables: Map<String, Value>, params: &JobParams) -> Map<String, Value> {
    if let Some(Value::String(verb)) = variables.get_mut("verb") {
        *verb = verb.to_uppercase();
    }

    let has_body = params.body.as_deref().is_some_and(|body| !body.is_empty());
    let json = params.json.as_ref().filter(|json| !json.is_null());
    if let (false, Some(json)) = (has_body, json) {
        variables.insert("body".to_string(), Value::String(json.to_string()));

        let mut content_type = Map::new();
        content_type.insert(
            CONTENT_TYPE.to_string(),
            Value::String(APPLICATION_JSON.to_string()),
        );
        let headers = params.headers.clone().unwrap_or_default();
        variables.insert(
            "headers".to_string(),
            Value::Object(merge(&headers, &content_type)),
        );
    }

    if let Some(headers) = variables.get_mut("headers") {
        if !headers.is_string() {
            *headers = Value::String(headers.to_string());
        }
    }

    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{Headers, RunAt};
    use chrono::TimeZone;

    fn base() -> JobParams {
        JobParams::default()
            .name("test-job")
            .verb("get")
            .endpoint("http://test.host")
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_defaults_are_applied() {
        let variables = normalize_at(&JobParams::default().endpoint("http://test.host"), now());

        assert_eq!(variables["enabled"], true);
        assert_eq!(variables["retryable"], true);
        assert_eq!(variables["runAt"], "2020-01-01T12:00:00.000Z");
        assert_eq!(variables["endpoint"], "http://test.host");
    }

    #[test]
    fn test_caller_values_override_defaults() {
        let at = Utc.with_ymd_and_hms(2021, 6, 1, 8, 30, 0).unwrap();
        let variables = normalize_at(
            &base().enabled(false).retryable(false).run_at(at),
            now(),
        );

        assert_eq!(variables["enabled"], false);
        assert_eq!(variables["retryable"], false);
        assert_eq!(variables["runAt"], "2021-06-01T08:30:00.000Z");
    }

    #[test]
    fn test_verb_is_uppercased_for_any_case() {
        for verb in ["get", "Get", "GET", "gEt"] {
            let variables = normalize_at(&base().verb(verb), now());
            assert_eq!(variables["verb"], "GET");
        }
    }

    #[test]
    fn test_json_becomes_body_and_content_type() {
        let variables = normalize_at(&base().json(json!({"a": 1})), now());

        assert_eq!(variables["body"], r#"{"a":1}"#);
        assert_eq!(variables["headers"], r#"{"Content-Type":"application/json"}"#);
        assert!(!variables.contains_key("json"));
    }

    #[test]
    fn test_body_wins_over_json() {
        let variables = normalize_at(&base().body("x").json(json!({"a": 1})), now());

        assert_eq!(variables["body"], "x");
        assert!(!variables.contains_key("headers"));
        assert!(!variables.contains_key("json"));
    }

    #[test]
    fn test_empty_body_falls_back_to_json() {
        let variables = normalize_at(&base().body("").json(json!([1, 2])), now());
        assert_eq!(variables["body"], "[1,2]");
    }

    #[test]
    fn test_json_content_type_is_appended_to_caller_headers() {
        let variables = normalize_at(
            &base().header("X-Foo", "bar").json(json!({"a": 1})),
            now(),
        );

        assert_eq!(
            variables["headers"],
            r#"{"X-Foo":"bar","Content-Type":"application/json"}"#
        );
    }

    #[test]
    fn test_json_content_type_replaces_caller_content_type() {
        let variables = normalize_at(
            &base()
                .header("Content-Type", "text/plain")
                .header("X-Foo", "bar")
                .json(json!({"a": 1})),
            now(),
        );

        assert_eq!(
            variables["headers"],
            r#"{"Content-Type":"application/json","X-Foo":"bar"}"#
        );
    }

    #[test]
    fn test_headers_are_serialized_without_json() {
        let variables = normalize_at(&base().header("X-Foo", "bar"), now());
        assert_eq!(variables["headers"], r#"{"X-Foo":"bar"}"#);
    }

    #[test]
    fn test_absent_body_and_headers_are_omitted() {
        let variables = normalize_at(&base(), now());

        assert!(!variables.contains_key("body"));
        assert!(!variables.contains_key("headers"));
        assert!(!variables.contains_key("runEvery"));
        assert!(!variables.contains_key("json"));
    }

    #[test]
    fn test_null_json_is_treated_as_absent() {
        let variables = normalize_at(&base().json(Value::Null), now());

        assert!(!variables.contains_key("body"));
        assert!(!variables.contains_key("headers"));

        let variables = normalize_update(&JobParams::default().json(Value::Null));
        assert!(variables.is_empty());
    }

    #[test]
    fn test_empty_headers_are_omitted() {
        let variables = normalize_at(&base().headers(Headers::new()), now());
        assert!(!variables.contains_key("headers"));

        let variables = normalize_update(&JobParams::default().headers(Headers::new()));
        assert!(variables.is_empty());

        let variables = normalize_at(&base().headers(Headers::new()).json(json!({"a": 1})), now());
        assert_eq!(variables["headers"], r#"{"Content-Type":"application/json"}"#);
    }

    #[test]
    fn test_run_every_and_raw_run_at_pass_through() {
        let variables = normalize_at(
            &base()
                .run_every("PT1H")
                .run_at(RunAt::from("2020-02-01T00:00:00Z")),
            now(),
        );

        assert_eq!(variables["runEvery"], "PT1H");
        assert_eq!(variables["runAt"], "2020-02-01T00:00:00.000Z");
    }

    #[test]
    fn test_update_sends_only_set_fields() {
        let variables = normalize_update(&JobParams::default().verb("get"));

        assert_eq!(variables.len(), 1);
        assert_eq!(variables["verb"], "GET");
    }

    #[test]
    fn test_update_drops_name_and_resolves_json() {
        let variables = normalize_update(&JobParams::default().name("other").json(json!({"a": 1})));

        assert!(!variables.contains_key("name"));
        assert_eq!(variables["body"], r#"{"a":1}"#);
        assert_eq!(variables["headers"], r#"{"Content-Type":"application/json"}"#);
        assert!(!variables.contains_key("enabled"));
        assert!(!variables.contains_key("runAt"));
    }
}
