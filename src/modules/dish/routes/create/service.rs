use crate::modules::dish::{
    pipeline::{Exchange, Next},
    repository::Dish,
    types::response,
};
use serde_json::Value;

pub fn service(exchange: &mut Exchange<'_>) -> Result<Next, response::Error> {
    let mut fields = exchange.locals.req_body.clone();
    fields.insert(String::from("id"), Value::String(exchange.ids.next_id()));

    let dish = Dish::from_fields(fields).map_err(|err| {
        tracing::debug!("Rejected dish body: {}", err);
        response::Error::MalformedDish(err.to_string())
    })?;

    exchange.dishes.append(dish.clone());
    tracing::info!("Dish created: {}", dish.id);

    Ok(Next::Respond(response::Success::DishCreated(dish)))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::dish::{repository::Dishes, types::request::Payload};
    use crate::utils::id::IdGenerator;
    use serde_json::json;

    struct FixedId;

    impl IdGenerator for FixedId {
        fn next_id(&self) -> String {
            String::from("fixed")
        }
    }

    fn exchange_with<'a>(dishes: &'a mut Dishes, body: Value) -> Exchange<'a> {
        let mut exchange = Exchange::new(Payload::default(), dishes, &FixedId);
        exchange.locals.req_body = body.as_object().cloned().unwrap_or_default();
        exchange
    }

    #[test]
    fn should_assign_generated_id_over_supplied_one() {
        let mut dishes = Dishes::default();
        let mut exchange = exchange_with(
            &mut dishes,
            json!({ "id": "mine", "name": "Pasta", "description": "d", "price": 12, "image_url": "http://x", "spicy": true }),
        );

        let Ok(Next::Respond(response::Success::DishCreated(dish))) = service(&mut exchange) else {
            panic!("expected a created dish");
        };

        assert_eq!(dish.id, "fixed");
        assert_eq!(dish.extra.get("spicy"), Some(&json!(true)));
        assert_eq!(dishes.enumerate(), &[dish]);
    }

    #[test]
    fn should_reject_body_that_is_not_a_dish() {
        let mut dishes = Dishes::default();
        let mut exchange = exchange_with(
            &mut dishes,
            json!({ "name": 42, "description": "d", "price": 12, "image_url": "http://x" }),
        );

        let result = service(&mut exchange).map(|_| ());
        assert!(matches!(result, Err(response::Error::MalformedDish(_))));
        assert!(dishes.is_empty());
    }
}
