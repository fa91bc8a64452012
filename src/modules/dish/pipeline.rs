use super::{
    middleware,
    repository::{Dish, Dishes},
    routes::{create, get, list, update},
    types::{request, response},
};
use crate::{types::Context, utils::id::IdGenerator};
use serde_json::{Map, Value};

/// Per-request scratch state shared by the stages of one chain.
#[derive(Debug, Default)]
pub struct Locals {
    pub req_body: Map<String, Value>,
    pub dish_index: Option<usize>,
    pub dish_id: Option<String>,
}

pub struct Exchange<'a> {
    pub request: request::Payload,
    pub locals: Locals,
    pub dishes: &'a mut Dishes,
    pub ids: &'a dyn IdGenerator,
}

impl<'a> Exchange<'a> {
    pub fn new(
        request: request::Payload,
        dishes: &'a mut Dishes,
        ids: &'a dyn IdGenerator,
    ) -> Self {
        Self {
            request,
            locals: Locals::default(),
            dishes,
            ids,
        }
    }

    /// The record resolved by the lookup stage.
    pub fn dish(&self) -> Result<&Dish, response::Error> {
        self.locals
            .dish_index
            .and_then(|index| self.dishes.get(index))
            .ok_or(response::Error::Unhandled)
    }

    pub fn dish_mut(&mut self) -> Result<&mut Dish, response::Error> {
        match self.locals.dish_index {
            Some(index) => self.dishes.get_mut(index).ok_or(response::Error::Unhandled),
            None => Err(response::Error::Unhandled),
        }
    }
}

pub enum Next {
    Continue,
    Respond(response::Success),
}

pub type Stage = fn(&mut Exchange<'_>) -> Result<Next, response::Error>;

pub struct Pipeline {
    pub name: &'static str,
    pub stages: &'static [Stage],
}

impl Pipeline {
    /// Runs stages in order. The first error ends the chain; nothing after it runs.
    pub fn run(&self, exchange: &mut Exchange<'_>) -> response::Response {
        for (position, stage) in self.stages.iter().enumerate() {
            match stage(exchange) {
                Ok(Next::Continue) => continue,
                Ok(Next::Respond(success)) => return Ok(success),
                Err(err) => {
                    tracing::debug!(
                        "{} pipeline halted at stage {}: {}",
                        self.name,
                        position,
                        err.message()
                    );
                    return Err(err);
                }
            }
        }

        tracing::error!("{} pipeline finished without a response", self.name);
        Err(response::Error::Unhandled)
    }
}

pub const CREATE: Pipeline = Pipeline {
    name: "create",
    stages: &[
        middleware::body_has_name_property,
        middleware::body_has_description_property,
        middleware::body_has_price_property,
        middleware::body_has_image_url_property,
        create::service::service,
    ],
};

pub const READ: Pipeline = Pipeline {
    name: "read",
    stages: &[middleware::dish_exists, get::service::service],
};

pub const UPDATE: Pipeline = Pipeline {
    name: "update",
    stages: &[
        middleware::dish_exists,
        middleware::body_has_name_property,
        middleware::body_has_description_property,
        middleware::body_has_price_property,
        middleware::body_has_image_url_property,
        middleware::body_id_matches_route_id,
        update::service::service,
    ],
};

pub const LIST: Pipeline = Pipeline {
    name: "list",
    stages: &[list::service::service],
};

/// Runs `pipeline` with the store locked for the whole chain.
pub async fn execute(
    ctx: &Context,
    pipeline: &Pipeline,
    request: request::Payload,
) -> response::Response {
    let mut dishes = ctx.dishes.lock().await;
    let mut exchange = Exchange::new(request, &mut *dishes, &*ctx.ids);

    pipeline.run(&mut exchange)
}
