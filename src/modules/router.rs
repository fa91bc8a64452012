use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;

use super::dish;
use crate::{types::Context, utils::error};
use std::sync::Arc;

async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({ "message": "Welcome to the dishes API" })),
    )
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> Response {
    error::into_response(
        StatusCode::NOT_FOUND,
        format!("Path not found: {}", uri.path()),
    )
}

pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> Response {
    error::into_response(
        StatusCode::METHOD_NOT_ALLOWED,
        format!("{} not allowed for {}", method, uri.path()),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/", get(health_check))
        .nest("/dishes", dish::get_router())
        .fallback(not_found)
}
