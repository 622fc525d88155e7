use lambda_runtime::Context;
use serde_json::{json, Value};

use hello_shared::models::{ApiResponse, HelloMessage};
use hello_shared::test_utils::lambda_fixtures::{test_context, test_event};
use hello_shared::test_utils::test_logging;

use crate::handlers::{handle, handler, HELLO_MESSAGE};

// Exact record the runtime sends back for every invocation
const EXPECTED_RESPONSE: &str = r#"{"statusCode":200,"headers":{"Content-Type":"application/json"},"body":"{\"message\": \"Hello from AWS Lambda Python function!\"}"}"#;

fn assert_hello_response(response: &ApiResponse) {
    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers.len(), 1);
    assert_eq!(
        response.headers.get("Content-Type").map(String::as_str),
        Some("application/json")
    );

    let body: Value = serde_json::from_str(&response.body).unwrap();
    assert_eq!(body, json!({ "message": HELLO_MESSAGE }));
}

#[tokio::test]
async fn test_empty_event_returns_literal_response() {
    test_logging::init_test_logging();

    let response = handler(test_event(json!({}), "")).await.unwrap();

    assert_hello_response(&response);
    assert_eq!(serde_json::to_string(&response).unwrap(), EXPECTED_RESPONSE);
}

#[tokio::test]
async fn test_event_and_context_are_ignored() {
    test_logging::init_test_logging();

    let baseline = handler(test_event(json!({}), "")).await.unwrap();
    let response = handler(test_event(json!({"foo": "bar"}), "abc"))
        .await
        .unwrap();

    assert_eq!(response, baseline);
    assert_eq!(serde_json::to_string(&response).unwrap(), EXPECTED_RESPONSE);
}

#[tokio::test]
async fn test_non_object_payloads_are_accepted() {
    test_logging::init_test_logging();

    let payloads = vec![
        Value::Null,
        json!(42),
        json!("plain text"),
        json!([1, 2, 3]),
        json!({"Records": [{"eventSource": "aws:s3", "s3": {"bucket": {"name": "b"}}}]}),
    ];

    for payload in payloads {
        log::debug!("Invoking handler with payload={}", payload);
        let response = handler(test_event(payload, "req-1")).await.unwrap();
        assert_hello_response(&response);
    }
}

#[test]
fn test_handle_with_default_context() {
    test_logging::init_test_logging();

    let response = handle(&Value::Null, &Context::default()).unwrap();

    assert_hello_response(&response);
}

#[test]
fn test_body_matches_python_json_dumps() {
    let response = handle(&json!({}), &test_context("abc")).unwrap();

    // json.dumps puts a space after the colon
    assert_eq!(
        response.body,
        r#"{"message": "Hello from AWS Lambda Python function!"}"#
    );
    let message: HelloMessage = serde_json::from_str(&response.body).unwrap();
    assert_eq!(message.message, HELLO_MESSAGE);
}

#[test]
fn test_repeated_invocations_are_byte_identical() {
    let first = serde_json::to_vec(&handle(&json!({}), &test_context("one")).unwrap()).unwrap();

    for (idx, event) in [json!({"a": 1}), json!(null), json!({"foo": "bar"})]
        .iter()
        .enumerate()
    {
        let context = test_context(&format!("request-{}", idx));
        let again = serde_json::to_vec(&handle(event, &context).unwrap()).unwrap();
        assert_eq!(again, first);
    }
}

#[tokio::test]
async fn test_concurrent_invocations_are_independent() {
    test_logging::init_test_logging();

    let tasks: Vec<_> = (0..16)
        .map(|i| {
            tokio::spawn(async move {
                handler(test_event(json!({ "n": i }), &format!("req-{}", i))).await
            })
        })
        .collect();

    for task in tasks {
        let response = task.await.unwrap().unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), EXPECTED_RESPONSE);
    }
}
