use crate::{
    modules::dish::{
        pipeline,
        types::{request, response},
    },
    types::Context,
};
use axum::extract::State;
use bytes::Bytes;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>, body: Bytes) -> response::Response {
    let body = request::parse_body(&body)
        .map_err(|err| response::Error::MalformedBody(err.to_string()))?;

    pipeline::execute(&ctx, &pipeline::CREATE, request::Payload::new(None, body)).await
}
