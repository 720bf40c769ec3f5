//! HTTP handlers for the summarize endpoint and the 404 fallback.

use axum::extract::{FromRequest, Request, State};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json, async_trait};
use tracing::{error, info};
use uuid::Uuid;

use super::helpers;
use super::server::AppState;
use crate::core::models::SummarizeRequest;

/// A summarize request read from either a JSON or a form-urlencoded body.
#[derive(Debug)]
pub struct SummarizeBody(pub SummarizeRequest);

/// Body could not be read as a summarize request.
#[derive(Debug)]
pub struct BodyRejection(String);

impl std::fmt::Display for BodyRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        helpers::internal_error()
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

#[async_trait]
impl<S> FromRequest<S> for SummarizeBody
where
    S: Send + Sync,
{
    type Rejection = BodyRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            Form::<SummarizeRequest>::from_request(req, state)
                .await
                .map(|Form(request)| Self(request))
                .map_err(|e| BodyRejection(format!("form body: {}", e)))
        } else {
            Json::<SummarizeRequest>::from_request(req, state)
                .await
                .map(|Json(request)| Self(request))
                .map_err(|e| BodyRejection(format!("json body: {}", e)))
        }
    }
}

/// `POST /summarize`
///
/// Accepts JSON or form-urlencoded bodies. Any failure, including a body that
/// cannot be read, is reported as a 500 with a generic plain-text message.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn summarize_handler(
    State(state): State<AppState>,
    payload: Result<SummarizeBody, BodyRejection>,
) -> Response {
    let request = match payload {
        Ok(SummarizeBody(request)) => request,
        Err(e) => {
            error!("Rejected summarize request body: {}", e);
            return helpers::internal_error();
        }
    };

    info!(
        url = %request.url,
        force_refresh = request.force_refresh,
        "Summarize request received"
    );

    match state.workflow.run(&request.url, request.force_refresh).await {
        Ok(record) => helpers::ok_summary(record),
        Err(e) => {
            error!("Error in summarize workflow: {}", e);
            helpers::internal_error()
        }
    }
}

pub async fn not_found() -> Response {
    helpers::err_response(StatusCode::NOT_FOUND, helpers::NOT_FOUND_MESSAGE)
}
