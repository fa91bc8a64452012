use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Terminal formatter shared by every route: `{ "error": message }` with the given status.
pub fn into_response(status: StatusCode, message: String) -> Response {
    if status.is_server_error() {
        tracing::error!("Request failed with {}: {}", status, message);
    } else {
        tracing::debug!("Request rejected with {}: {}", status, message);
    }

    (status, Json(json!({ "error": message }))).into_response()
}
