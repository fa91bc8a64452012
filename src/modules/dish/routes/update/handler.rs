use crate::{
    modules::dish::{
        pipeline,
        types::{request, response},
    },
    types::Context,
};
use axum::extract::{Path, State};
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(dish_id): Path<String>,
    body: Bytes,
) -> response::Response {
    let body = request::parse_body(&body)
        .map_err(|err| response::Error::MalformedBody(err.to_string()))?;

    pipeline::execute(
        &ctx,
        &pipeline::UPDATE,
        request::Payload::new(Some(dish_id), body),
    )
    .await
}
