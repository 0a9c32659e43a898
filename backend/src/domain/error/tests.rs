//! Tests for domain error construction and trace capture.

use super::*;
use rstest::{fixture, rstest};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn scoped_trace_id() -> TraceId {
    TRACE_ID.parse().expect("valid trace id")
}

#[rstest]
fn not_found_sets_code_and_message() {
    let error = Error::not_found("missing");
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "missing");
}

#[rstest]
fn display_is_the_message() {
    assert_eq!(Error::not_found("Teacher not found").to_string(), "Teacher not found");
}

#[rstest]
fn trace_id_is_absent_out_of_scope() {
    assert!(Error::not_found("gone").trace_id().is_none());
}

#[rstest]
#[tokio::test]
async fn trace_id_is_captured_in_scope(scoped_trace_id: TraceId) {
    let error = TraceId::scope(scoped_trace_id, async { Error::not_found("gone") }).await;
    assert_eq!(error.trace_id(), Some(TRACE_ID));
}

#[rstest]
fn with_trace_id_overrides_capture() {
    let error = Error::not_found("gone").with_trace_id("abc");
    assert_eq!(error.trace_id(), Some("abc"));
}
