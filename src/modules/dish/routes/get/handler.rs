use crate::{
    modules::dish::{
        pipeline,
        types::{request, response},
    },
    types::Context,
};
use axum::extract::{Path, State};
use serde_json::Value;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(dish_id): Path<String>,
) -> response::Response {
    pipeline::execute(
        &ctx,
        &pipeline::READ,
        request::Payload::new(Some(dish_id), Value::Null),
    )
    .await
}
