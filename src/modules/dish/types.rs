pub mod request {
    use serde_json::{Map, Value};

    /// Everything a pipeline stage may read from the inbound request.
    #[derive(Debug, Clone, Default)]
    pub struct Payload {
        pub dish_id: Option<String>,
        pub body: Value,
    }

    impl Payload {
        pub fn new(dish_id: Option<String>, body: Value) -> Self {
            Self { dish_id, body }
        }

        /// The `data` object of the body, or an empty object when absent or not an object.
        pub fn data(&self) -> Map<String, Value> {
            match self.body.get("data") {
                Some(Value::Object(data)) => data.clone(),
                _ => Map::new(),
            }
        }
    }

    /// An empty body reads as `{}`.
    pub fn parse_body(raw: &[u8]) -> Result<Value, serde_json::Error> {
        if raw.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Object(Map::new()));
        }

        serde_json::from_slice(raw)
    }
}

pub mod response {
    use crate::{
        modules::dish::repository::Dish,
        utils::error::{self, INTERNAL_ERROR_MESSAGE},
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Success {
        DishCreated(Dish),
        Dish(Dish),
        DishUpdated(Dish),
        Dishes(Vec<Dish>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
                Self::Dish(dish) | Self::DishUpdated(dish) => {
                    (StatusCode::OK, Json(json!({ "data": dish }))).into_response()
                }
                Self::Dishes(dishes) => {
                    (StatusCode::OK, Json(json!({ "data": dishes }))).into_response()
                }
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    pub enum Error {
        MissingProperty(&'static str),
        InvalidPrice,
        DishNotFound(String),
        IdMismatch { body: String, route: String },
        MalformedBody(String),
        MalformedDish(String),
        Unhandled,
    }

    impl Error {
        pub fn status(&self) -> StatusCode {
            match self {
                Self::MissingProperty(_)
                | Self::InvalidPrice
                | Self::IdMismatch { .. }
                | Self::MalformedBody(_)
                | Self::MalformedDish(_) => StatusCode::BAD_REQUEST,
                Self::DishNotFound(_) => StatusCode::NOT_FOUND,
                Self::Unhandled => StatusCode::INTERNAL_SERVER_ERROR,
            }
        }

        pub fn message(&self) -> String {
            match self {
                Self::MissingProperty(message) => message.to_string(),
                Self::InvalidPrice => String::from(
                    "Dish must include a price and it must be an integer greater than 0.",
                ),
                Self::DishNotFound(id) => format!("Dish does not exist: {}.", id),
                Self::IdMismatch { body, route } => format!(
                    "Dish id does not match route id. Dish: {}, Route: {}",
                    body, route
                ),
                Self::MalformedBody(reason) => format!("Malformed request body: {}", reason),
                Self::MalformedDish(reason) => format!("Malformed dish: {}", reason),
                Self::Unhandled => INTERNAL_ERROR_MESSAGE.to_string(),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            error::into_response(self.status(), self.message())
        }
    }

    pub type Response = Result<Success, Error>;
}
