pub mod create;
pub mod get;
pub mod list;
pub mod update;

use crate::{modules::router::method_not_allowed, types::Context};
use axum::routing::{self, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            routing::get(list::handler)
                .post(create::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:dish_id",
            routing::get(get::handler)
                .put(update::handler)
                .fallback(method_not_allowed),
        )
}
