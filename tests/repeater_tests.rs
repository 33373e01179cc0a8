//! Integration tests for the Repeater client operations.
//!
//! These tests run every client operation against a mock GraphQL endpoint
//! and check both the request it sends and the domain objects it returns.

use chrono::{DateTime, Duration, Utc};
use repeater::{ErrorKind, JobParams, Repeater, RepeaterError, RepeaterOptions};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_client(server: &MockServer) -> Repeater {
    Repeater::new(
        "abc",
        Some(
            RepeaterOptions::default()
                .endpoint(server.uri())
                .extra("foo", "bar"),
        ),
    )
    .unwrap()
}

fn job_record(name: &str) -> Value {
    json!({
        "name": name,
        "enabled": true,
        "body": "",
        "endpoint": "http://test.host",
        "verb": "GET",
        "headers": "{}",
        "retryable": true,
        "runAt": "2020-01-01T00:00:00.000Z",
        "runEvery": null,
        "createdAt": "2020-01-01T00:00:00.000Z",
        "updatedAt": "2020-01-01T00:00:00.000Z",
        "lastRunAt": null,
        "nextRunAt": "2020-01-01T00:00:00.000Z"
    })
}

fn error_response() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "data": null,
        "errors": [{"message": "Mocked error response"}]
    }))
}

fn valid_params() -> JobParams {
    JobParams::default()
        .name("test-job")
        .verb("get")
        .endpoint("http://test.host")
}

/// Returns the `variables` of the only request the server received.
async fn sent_variables(server: &MockServer) -> Value {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    body["variables"].clone()
}

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_new_requires_token() {
    let error = Repeater::new("", None).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parameter);
    assert_eq!(error.field(), Some("token"));
    assert_eq!(error.to_string(), "Parameter error: token is required");
}

#[test]
fn test_new_rejects_malformed_endpoint() {
    let error = Repeater::new("abc", Some(RepeaterOptions::default().endpoint("nope"))).unwrap_err();
    assert_eq!(error.field(), Some("options.endpoint"));
}

#[test]
fn test_repeater_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Repeater>();
}

#[tokio::test]
async fn test_requests_carry_bearer_token_and_operation_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(header("Authorization", "Bearer abc"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({"operationName": "JobsQuery"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"jobs": []}})))
        .expect(1)
        .mount(&server)
        .await;

    let jobs = create_client(&server).jobs().await.unwrap();
    assert!(jobs.is_empty());
}

// ============================================================================
// jobs() Tests
// ============================================================================

#[tokio::test]
async fn test_jobs_returns_a_job_per_record() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "JobsQuery"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"jobs": [job_record("first"), job_record("second")]}
        })))
        .mount(&server)
        .await;

    let jobs = create_client(&server).jobs().await.unwrap();

    let names: Vec<&str> = jobs.iter().map(repeater::Job::name).collect();
    assert_eq!(names, vec!["first", "second"]);
    for job in &jobs {
        assert_eq!(job.config().token().as_ref(), "abc");
        assert_eq!(job.config().options()["foo"], "bar");
        assert_eq!(job.config().endpoint().as_ref(), server.uri());
        assert!(job.headers().is_none());
    }
}

#[tokio::test]
async fn test_jobs_sends_no_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"jobs": []}})))
        .mount(&server)
        .await;

    create_client(&server).jobs().await.unwrap();

    assert!(sent_variables(&server).await.is_null());
}

#[tokio::test]
async fn test_jobs_wraps_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response())
        .mount(&server)
        .await;

    let error = create_client(&server).jobs().await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::List);
    assert!(error.to_string().starts_with("Could not list jobs: "));
    assert!(error.to_string().contains("Mocked error response"));
}

#[tokio::test]
async fn test_jobs_wraps_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let error = create_client(&server).jobs().await.unwrap_err();

    assert!(matches!(error, RepeaterError::List { ref message } if message.contains("boom")));
}

// ============================================================================
// job() Tests
// ============================================================================

#[tokio::test]
async fn test_job_returns_the_named_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "JobQuery",
            "variables": {"name": "test-job"}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"job": job_record("test-job")}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let job = create_client(&server).job("test-job").await.unwrap().unwrap();

    assert_eq!(job.name(), "test-job");
    assert_eq!(job.verb(), Some("GET"));
    assert!(!job.is_deleted());
}

#[tokio::test]
async fn test_job_returns_none_when_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"job": null}})))
        .mount(&server)
        .await;

    let job = create_client(&server).job("missing").await.unwrap();

    assert!(job.is_none());
}

#[tokio::test]
async fn test_job_wraps_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response())
        .mount(&server)
        .await;

    let error = create_client(&server).job("test-job").await.unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Fetch);
    assert!(error.to_string().contains("Mocked error response"));
}

// ============================================================================
// enqueue() Tests
// ============================================================================

#[tokio::test]
async fn test_enqueue_returns_created_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "CreateJobMutation"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"createJob": job_record("test-job")}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let job = create_client(&server).enqueue(&valid_params()).await.unwrap();

    assert_eq!(job.name(), "test-job");
    assert_eq!(job.config().options()["foo"], "bar");
}

#[tokio::test]
async fn test_enqueue_applies_defaults_and_uppercases_verb() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"createJob": job_record("test-job")}})),
        )
        .mount(&server)
        .await;

    let before = Utc::now();
    create_client(&server).enqueue(&valid_params()).await.unwrap();
    let after = Utc::now();

    let variables = sent_variables(&server).await;
    assert_eq!(variables["name"], "test-job");
    assert_eq!(variables["verb"], "GET");
    assert_eq!(variables["endpoint"], "http://test.host");
    assert_eq!(variables["enabled"], true);
    assert_eq!(variables["retryable"], true);
    assert!(variables.get("body").is_none());
    assert!(variables.get("headers").is_none());
    assert!(variables.get("json").is_none());

    let run_at: DateTime<Utc> = variables["runAt"].as_str().unwrap().parse().unwrap();
    assert!(run_at >= before - Duration::milliseconds(1));
    assert!(run_at <= after);
}

#[tokio::test]
async fn test_enqueue_sends_json_as_body_with_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"createJob": job_record("test-job")}})),
        )
        .mount(&server)
        .await;

    create_client(&server)
        .enqueue(&valid_params().header("X-Foo", "bar").json(json!({"a": 1})))
        .await
        .unwrap();

    let variables = sent_variables(&server).await;
    assert_eq!(variables["body"], r#"{"a":1}"#);
    assert_eq!(
        variables["headers"],
        r#"{"X-Foo":"bar","Content-Type":"application/json"}"#
    );
    assert!(variables.get("json").is_none());
}

#[tokio::test]
async fn test_enqueue_keeps_explicit_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"createJob": job_record("test-job")}})),
        )
        .mount(&server)
        .await;

    create_client(&server)
        .enqueue(&valid_params().body("x").run_every("P1D"))
        .await
        .unwrap();

    let variables = sent_variables(&server).await;
    assert_eq!(variables["body"], "x");
    assert_eq!(variables["runEvery"], "P1D");
}

#[tokio::test]
async fn test_enqueue_rejects_invalid_params_without_sending() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    let client = create_client(&server);

    let error = client
        .enqueue(&valid_params().verb("fetch"))
        .await
        .unwrap_err();
    assert_eq!(error.field(), Some("verb"));

    let error = client
        .enqueue(&valid_params().endpoint("test.host"))
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Parameter error: endpoint must look like a URL");

    let error = client
        .enqueue(&valid_params().run_every("foobar"))
        .await
        .unwrap_err();
    assert_eq!(
        error.to_string(),
        "Parameter error: runEvery must be an ISO8601 Duration string"
    );
}

#[tokio::test]
async fn test_enqueue_wraps_transport_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(error_response())
        .mount(&server)
        .await;

    let error = create_client(&server)
        .enqueue(&valid_params())
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Create);
    assert!(error.to_string().starts_with("Could not create job: "));
    assert!(error.to_string().contains("Mocked error response"));
}

// ============================================================================
// enqueue_or_update() Tests
// ============================================================================

#[tokio::test]
async fn test_enqueue_or_update_updates_existing_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "JobQuery"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"data": {"job": job_record("test-job")}})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "UpdateJobMutation",
            "variables": {"name": "test-job", "verb": "POST"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"updateJob": {"name": "test-job", "verb": "POST"}}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "CreateJobMutation"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let job = create_client(&server)
        .enqueue_or_update(&valid_params().verb("post"))
        .await
        .unwrap();

    assert_eq!(job.verb(), Some("POST"));
    assert_eq!(job.endpoint(), Some("http://test.host"));
}

#[tokio::test]
async fn test_enqueue_or_update_creates_missing_job() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "JobQuery"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"job": null}})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"operationName": "CreateJobMutation"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"createJob": job_record("test-job")}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let job = create_client(&server)
        .enqueue_or_update(&valid_params())
        .await
        .unwrap();

    assert_eq!(job.name(), "test-job");
}
