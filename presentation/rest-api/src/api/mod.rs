pub mod cart;
pub mod catalog;
pub mod error;
pub mod health;
pub mod session;
pub mod storefront;
pub mod tags;
