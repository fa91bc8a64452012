mod handler;
pub mod service;

pub use handler::handler;
