//! Error body test helpers for backend testing
//!
//! Assertions for the backend's JSON error contract that do not depend on
//! backend types, so integration tests check the wire shape only.

use actix_web::http::header::HeaderMap;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Local mirror of the backend's error body.
#[derive(Debug, Deserialize)]
struct ErrorBodyLike {
    error: String,
    code: String,
    status: u16,
    trace_id: String,
}

/// Assert that response parts conform to the stable error contract
///
/// Validates:
/// - HTTP status matches expected
/// - x-trace-id header exists and matches body trace_id
/// - `code` and `status` match, and `error` contains the expected text
pub fn assert_error_body_from_parts(
    status: StatusCode,
    headers: &HeaderMap,
    body_bytes: &[u8],
    expected_code: &str,
    expected_status: StatusCode,
    expected_error_contains: Option<&str>,
) {
    assert_eq!(status, expected_status);

    let body_str =
        std::str::from_utf8(body_bytes).expect("Response body should be valid UTF-8");
    let body: ErrorBodyLike = serde_json::from_str(body_str)
        .unwrap_or_else(|_| panic!("Response body should be an error body, got: {body_str}"));

    let trace_id_header = headers
        .get("x-trace-id")
        .expect("x-trace-id header should be present")
        .to_str()
        .expect("x-trace-id header should be valid UTF-8");

    assert_eq!(
        body.trace_id, trace_id_header,
        "trace_id in body should match x-trace-id header"
    );
    assert_eq!(body.code, expected_code);
    assert_eq!(body.status, expected_status.as_u16());

    if let Some(expected) = expected_error_contains {
        assert!(
            body.error.contains(expected),
            "Expected error to contain '{}', but got '{}'",
            expected,
            body.error
        );
    }
}

/// Assert that a ServiceResponse conforms to the stable error contract
pub async fn assert_error_body_from_service_response(
    resp: actix_web::dev::ServiceResponse<actix_web::body::BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    expected_error_contains: Option<&str>,
) {
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = actix_web::test::read_body(resp).await;

    assert_error_body_from_parts(
        status,
        &headers,
        &body,
        expected_code,
        expected_status,
        expected_error_contains,
    );
}
