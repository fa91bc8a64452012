use crate::modules::dish::{
    pipeline::{Exchange, Next},
    repository::Dish,
    types::response,
};
use serde_json::{Map, Value};

/// Overwrites fields the dish already has with differing body values.
/// Body-only fields are ignored and `id` is never touched. Returns the changed names.
fn merge_existing_fields(fields: &mut Map<String, Value>, body: &Map<String, Value>) -> Vec<String> {
    let mut changed = vec![];

    for (name, value) in fields.iter_mut() {
        if name == "id" {
            continue;
        }

        if let Some(incoming) = body.get(name) {
            if incoming != value {
                *value = incoming.clone();
                changed.push(name.clone());
            }
        }
    }

    changed
}

pub fn service(exchange: &mut Exchange<'_>) -> Result<Next, response::Error> {
    let mut fields = exchange.dish()?.fields();
    let changed = merge_existing_fields(&mut fields, &exchange.locals.req_body);

    if !changed.is_empty() {
        let updated = Dish::from_fields(fields).map_err(|err| {
            tracing::debug!("Rejected dish update: {}", err);
            response::Error::MalformedDish(err.to_string())
        })?;

        *exchange.dish_mut()? = updated;
    }

    let dish = exchange.dish()?.clone();
    tracing::info!("Dish updated: {} (changed: {:?})", dish.id, changed);

    Ok(Next::Respond(response::Success::DishUpdated(dish)))
}
