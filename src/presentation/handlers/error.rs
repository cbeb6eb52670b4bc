use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Every failure surfaces as this shape; there are no structured error
/// codes, only a message intended for display or logging.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub(super) fn error_response(
    status: StatusCode,
    message: String,
    uniform_error_status: bool,
) -> Response {
    let status = if uniform_error_status {
        StatusCode::OK
    } else {
        status
    };
    (status, Json(ErrorResponse { error: message })).into_response()
}
