use super::{
    pipeline::{Exchange, Next},
    types::response::Error,
};
use serde_json::Value;

/// JSON truthiness: `null`, `false`, `0` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|number| number != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn display(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn body_has_property(
    exchange: &mut Exchange<'_>,
    property: &str,
    message: &'static str,
) -> Result<Next, Error> {
    let data = exchange.request.data();
    let present = data.get(property).is_some_and(is_truthy);

    exchange.locals.req_body = data;

    if !present {
        return Err(Error::MissingProperty(message));
    }

    Ok(Next::Continue)
}

pub fn body_has_name_property(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    body_has_property(exchange, "name", "Dish must include a name.")
}

pub fn body_has_description_property(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    body_has_property(exchange, "description", "Dish must include a description.")
}

pub fn body_has_image_url_property(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    body_has_property(exchange, "image_url", "Dish must include an image_url.")
}

// Positive number only; integrality is not checked despite the message.
pub fn body_has_price_property(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    match exchange.locals.req_body.get("price") {
        Some(Value::Number(price)) if price.as_f64().is_some_and(|price| price > 0.0) => {
            Ok(Next::Continue)
        }
        _ => Err(Error::InvalidPrice),
    }
}

pub fn dish_exists(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    let dish_id = exchange.request.dish_id.clone().unwrap_or_default();

    match exchange.dishes.position(&dish_id) {
        Some(index) => {
            exchange.locals.dish_index = Some(index);
            exchange.locals.dish_id = Some(dish_id);
            Ok(Next::Continue)
        }
        None => Err(Error::DishNotFound(dish_id)),
    }
}

pub fn body_id_matches_route_id(exchange: &mut Exchange<'_>) -> Result<Next, Error> {
    let dish_id = exchange
        .locals
        .dish_id
        .as_deref()
        .ok_or(Error::Unhandled)?;

    match exchange.locals.req_body.get("id") {
        Some(id) if is_truthy(id) && id.as_str() != Some(dish_id) => Err(Error::IdMismatch {
            body: display(id),
            route: dish_id.to_string(),
        }),
        _ => Ok(Next::Continue),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::modules::dish::{
        repository::{Dish, Dishes},
        types::request::Payload,
    };
    use crate::utils::id::UlidGenerator;
    use serde_json::json;

    fn stored(id: &str) -> Dish {
        Dish::from_fields(
            json!({ "id": id, "name": "Pasta", "description": "d", "price": 12, "image_url": "http://x" })
                .as_object()
                .cloned()
                .unwrap(),
        )
        .unwrap()
    }

    fn check(
        stage: fn(&mut Exchange<'_>) -> Result<Next, Error>,
        dishes: &mut Dishes,
        dish_id: Option<&str>,
        body: Value,
    ) -> Result<(), Error> {
        let payload = Payload::new(dish_id.map(String::from), body);
        let mut exchange = Exchange::new(payload, dishes, &UlidGenerator);
        stage(&mut exchange).map(|_| ())
    }

    #[test]
    fn should_follow_json_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!("")] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(-1), json!("0"), json!([]), json!({})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn should_reject_missing_or_empty_name() {
        let mut dishes = Dishes::default();

        assert_eq!(
            check(body_has_name_property, &mut dishes, None, json!({ "data": {} })),
            Err(Error::MissingProperty("Dish must include a name."))
        );
        assert_eq!(
            check(
                body_has_name_property,
                &mut dishes,
                None,
                json!({ "data": { "name": "" } })
            ),
            Err(Error::MissingProperty("Dish must include a name."))
        );
        assert_eq!(
            check(body_has_name_property, &mut dishes, None, json!({})),
            Err(Error::MissingProperty("Dish must include a name."))
        );
        assert!(check(
            body_has_name_property,
            &mut dishes,
            None,
            json!({ "data": { "name": "Pasta" } })
        )
        .is_ok());
    }

    #[test]
    fn should_store_body_even_when_property_is_missing() {
        let mut dishes = Dishes::default();
        let payload = Payload::new(None, json!({ "data": { "price": 3 } }));
        let mut exchange = Exchange::new(payload, &mut dishes, &UlidGenerator);

        assert!(body_has_description_property(&mut exchange).is_err());
        assert_eq!(exchange.locals.req_body.get("price"), Some(&json!(3)));
    }

    #[test]
    fn should_read_price_from_stored_body() {
        let mut dishes = Dishes::default();
        let payload = Payload::new(None, json!({ "data": { "price": 12 } }));
        let mut exchange = Exchange::new(payload, &mut dishes, &UlidGenerator);

        // nothing stored yet
        assert_eq!(
            body_has_price_property(&mut exchange).map(|_| ()),
            Err(Error::InvalidPrice)
        );

        body_has_name_property(&mut exchange).ok();
        assert!(body_has_price_property(&mut exchange).is_ok());
    }

    #[test]
    fn should_only_accept_positive_numeric_price() {
        let mut dishes = Dishes::default();

        for price in [json!(0), json!(-3), json!("12"), json!(null), json!(true)] {
            let mut exchange = Exchange::new(Payload::default(), &mut dishes, &UlidGenerator);
            exchange.locals.req_body =
                json!({ "price": price.clone() }).as_object().cloned().unwrap();

            assert_eq!(
                body_has_price_property(&mut exchange).map(|_| ()),
                Err(Error::InvalidPrice),
                "price {price} should be rejected"
            );
        }

        for price in [json!(1), json!(12.5), json!(0.01)] {
            let mut exchange = Exchange::new(Payload::default(), &mut dishes, &UlidGenerator);
            exchange.locals.req_body = json!({ "price": price }).as_object().cloned().unwrap();

            assert!(body_has_price_property(&mut exchange).is_ok());
        }
    }

    #[test]
    fn should_resolve_existing_dish() {
        let mut dishes = Dishes::new(vec![stored("a"), stored("b")]);
        let payload = Payload::new(Some(String::from("b")), Value::Null);
        let mut exchange = Exchange::new(payload, &mut dishes, &UlidGenerator);

        assert!(dish_exists(&mut exchange).is_ok());
        assert_eq!(exchange.locals.dish_index, Some(1));
        assert_eq!(exchange.locals.dish_id.as_deref(), Some("b"));
        assert_eq!(exchange.dish().unwrap().id, "b");
    }

    #[test]
    fn should_report_missing_dish_id() {
        let mut dishes = Dishes::new(vec![stored("a")]);
        let err = check(dish_exists, &mut dishes, Some("zzz"), Value::Null).unwrap_err();

        assert_eq!(err, Error::DishNotFound(String::from("zzz")));
        assert_eq!(err.status().as_u16(), 404);
        assert!(err.message().contains("zzz"));
    }

    #[test]
    fn should_compare_body_id_with_route_id() {
        let mut dishes = Dishes::new(vec![stored("a")]);

        let run = |dishes: &mut Dishes, id: Value| -> Result<(), Error> {
            let payload = Payload::new(Some(String::from("a")), json!({ "data": { "id": id } }));
            let mut exchange = Exchange::new(payload, dishes, &UlidGenerator);
            dish_exists(&mut exchange)?;
            body_has_name_property(&mut exchange).ok();
            body_id_matches_route_id(&mut exchange).map(|_| ())
        };

        assert!(run(&mut dishes, json!("a")).is_ok());
        assert!(run(&mut dishes, json!(null)).is_ok());
        assert!(run(&mut dishes, json!("")).is_ok());

        let err = run(&mut dishes, json!("b")).unwrap_err();
        assert_eq!(err.status().as_u16(), 400);
        assert_eq!(
            err.message(),
            "Dish id does not match route id. Dish: b, Route: a"
        );

        assert!(run(&mut dishes, json!(7)).is_err());
    }
}
