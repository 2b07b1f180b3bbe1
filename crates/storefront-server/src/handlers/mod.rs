//! HTTP handlers

pub mod brands;
pub mod cart;
pub mod categories;
pub mod health;
pub mod products;

pub use health::health;
