pub mod cart_gateway;
pub mod client;
pub mod product_gateway;
mod queries;
mod types;
