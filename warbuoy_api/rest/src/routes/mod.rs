use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ApiError;

pub mod contact;

pub const SERVER_ERROR: &str = "Server error. Please try again later.";

/// Logs `err` and responds with a generic 500. The error itself is only
/// included in the response if `expose_details` is set.
pub fn internal_server_error(err: impl Into<anyhow::Error>, expose_details: bool) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    let message = if expose_details {
        format!("{SERVER_ERROR} ({err:#})")
    } else {
        SERVER_ERROR.into()
    };
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub fn error(code: StatusCode, error: impl Into<String>) -> Response {
    (
        code,
        Json(ApiError {
            error: error.into(),
        }),
    )
        .into_response()
}
