use crate::{
    modules::dish::{
        pipeline,
        types::{request, response},
    },
    types::Context,
};
use axum::extract::State;
use std::sync::Arc;

pub async fn handler(State(ctx): State<Arc<Context>>) -> response::Response {
    pipeline::execute(&ctx, &pipeline::LIST, request::Payload::default()).await
}
