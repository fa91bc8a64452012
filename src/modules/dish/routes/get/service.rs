use crate::modules::dish::{
    pipeline::{Exchange, Next},
    types::response,
};

pub fn service(exchange: &mut Exchange<'_>) -> Result<Next, response::Error> {
    let dish = exchange.dish()?.clone();

    Ok(Next::Respond(response::Success::Dish(dish)))
}
