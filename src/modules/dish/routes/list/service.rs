use crate::modules::dish::{
    pipeline::{Exchange, Next},
    types::response,
};

/// Snapshot of the whole store in append order.
pub fn service(exchange: &mut Exchange<'_>) -> Result<Next, response::Error> {
    Ok(Next::Respond(response::Success::Dishes(
        exchange.dishes.enumerate().to_vec(),
    )))
}
