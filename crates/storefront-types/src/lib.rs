//! Storefront Types - Pure record definitions shared by the store and the API
//!
//! This crate contains only plain data types and request validation, with no
//! async runtime or web framework dependencies.

pub mod cart;
pub mod catalog;
pub mod product;
pub mod user;

pub use cart::*;
pub use catalog::*;
pub use product::*;
pub use user::*;

/// Session id used by the storefront client for anonymous carts
pub const GUEST_SESSION_ID: &str = "guest-session";
