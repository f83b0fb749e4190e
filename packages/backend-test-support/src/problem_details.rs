//! Assertions for the backend's problem+json error contract.
//!
//! Deliberately independent of backend types so a change to the wire shape
//! breaks these tests instead of silently following along.

use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::http::StatusCode;
use serde::Deserialize;

/// Wire shape of an error body.
#[derive(Debug, Deserialize)]
pub struct ProblemDetailsLike {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
}

/// Assert `resp` is a problem+json error with the given code and status.
///
/// Also checks that `x-trace-id` matches the body's `trace_id`, that
/// `type` is the code's URN, and, if given, that `detail` contains
/// `detail_contains`. Returns the parsed body for further checks.
pub async fn assert_problem_details(
    resp: ServiceResponse<BoxBody>,
    expected_code: &str,
    expected_status: StatusCode,
    detail_contains: Option<&str>,
) -> ProblemDetailsLike {
    assert_eq!(resp.status(), expected_status, "unexpected status");

    let headers = resp.headers().clone();
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/problem+json"),
        "Content-Type must be application/problem+json (got {content_type})"
    );

    let body = actix_web::test::read_body(resp).await;
    let problem: ProblemDetailsLike = serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "body is not ProblemDetails ({e}): {}",
            String::from_utf8_lossy(&body)
        )
    });

    let trace_header = headers
        .get("x-trace-id")
        .and_then(|v| v.to_str().ok())
        .expect("x-trace-id header should be present");
    assert_eq!(problem.trace_id, trace_header, "trace_id mismatch");
    assert!(!problem.trace_id.is_empty());

    assert_eq!(problem.code, expected_code);
    assert_eq!(problem.status, expected_status.as_u16());
    assert_eq!(
        problem.type_,
        format!("urn:diffbetween:error:{}", expected_code.to_lowercase())
    );
    assert!(!problem.title.is_empty());

    if let Some(fragment) = detail_contains {
        assert!(
            problem.detail.contains(fragment),
            "expected detail to contain {fragment:?}, got {:?}",
            problem.detail
        );
    }
    problem
}
