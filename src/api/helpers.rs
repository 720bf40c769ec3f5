//! Response builders shared by the HTTP handlers.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::core::models::{SummarizeResponse, SummaryRecord};

/// Body returned for every failed summarize request; details stay in the logs.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing your request.";

pub const NOT_FOUND_MESSAGE: &str = "404: Page Not Found";

/// Returns a 200 OK response with the summary envelope.
#[must_use]
pub fn ok_summary(record: SummaryRecord) -> Response {
    (StatusCode::OK, Json(SummarizeResponse::from(record))).into_response()
}

/// Returns a plain-text response with the given status code.
#[must_use]
pub fn err_response(status: StatusCode, message: &str) -> Response {
    (status, message.to_string()).into_response()
}

#[must_use]
pub fn internal_error() -> Response {
    err_response(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_FAILURE_MESSAGE)
}
