//! Golden tests - fixture-based tests that lock expected behavior
//!
//! Each fixture case is a request and the exact response envelope (and HTTP
//! status) the dispatcher must produce for it. Any change in wire output will
//! cause these tests to fail, signaling a potential breaking change.
//!
//! Run with: cargo test --test golden_tests

use serde::Deserialize;
use serde_json::Value;
use std::fs;

use mcp_lab::{Dispatcher, McpHandler};

#[derive(Debug, Deserialize)]
struct TestCase {
    name: String,
    #[serde(default)]
    request: Option<Value>,
    #[serde(default)]
    raw_body: Option<String>,
    status: u16,
    #[serde(default)]
    response: Option<Value>,
    #[serde(default)]
    error_code: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Fixture {
    test_cases: Vec<TestCase>,
}

fn load_fixture() -> Fixture {
    let fixture_path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/dispatch_cases.json"
    );
    let content =
        fs::read_to_string(fixture_path).expect("Failed to read dispatch_cases.json fixture");
    serde_json::from_str(&content).expect("Failed to parse fixture JSON")
}

fn request_body(case: &TestCase) -> String {
    match (&case.request, &case.raw_body) {
        (Some(request), None) => serde_json::to_string(request).unwrap(),
        (None, Some(raw)) => raw.clone(),
        _ => panic!(
            "Case '{}': exactly one of request/raw_body is required",
            case.name
        ),
    }
}

#[test]
fn test_dispatch_golden() {
    let fixture = load_fixture();
    assert!(!fixture.test_cases.is_empty());

    let dispatcher = Dispatcher::default();

    for case in &fixture.test_cases {
        let body = request_body(case);
        let raw = dispatcher.handle_raw(body.as_bytes());

        assert_eq!(
            raw.status_code, case.status,
            "Case '{}': status mismatch (body: {})",
            case.name, raw.body
        );
        assert_eq!(
            raw.headers.get("Content-Type").map(String::as_str),
            Some("application/json"),
            "Case '{}': content type",
            case.name
        );

        if let Some(expected) = &case.response {
            // Fixture key order is the wire order, so compare serialized text
            let expected_body = serde_json::to_string(expected).unwrap();
            assert_eq!(
                raw.body, expected_body,
                "Case '{}': response body mismatch",
                case.name
            );
        }

        if let Some(code) = case.error_code {
            let actual: Value = serde_json::from_str(&raw.body).unwrap();
            assert_eq!(
                actual["error"]["code"], code,
                "Case '{}': error code mismatch",
                case.name
            );
            assert_eq!(actual["id"], Value::Null, "Case '{}': id", case.name);
            assert!(actual.get("result").is_none(), "Case '{}'", case.name);
        }
    }
}

#[test]
fn test_every_case_has_an_expectation() {
    for case in load_fixture().test_cases {
        assert!(
            case.response.is_some() || case.error_code.is_some(),
            "Case '{}' asserts nothing",
            case.name
        );
    }
}
