//! Error responses for the admin HTTP surface.
//!
//! Guard misses are silent no-ops inside the page core; the only failure this
//! surface reports is an unavailable settings store.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ProblemBody {
    title: &'static str,
    status: u16,
    detail: String,
}

/// Structured error returned by handlers.
#[derive(Debug)]
pub(crate) struct AdminError {
    status: StatusCode,
    title: &'static str,
    detail: String,
}

impl AdminError {
    pub(crate) fn internal(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            title: "internal server error",
            detail: detail.into(),
        }
    }
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let body = ProblemBody {
            title: self.title,
            status: self.status.as_u16(),
            detail: self.detail,
        };
        (self.status, Json(body)).into_response()
    }
}
