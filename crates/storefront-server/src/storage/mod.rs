//! Storage layer
//!
//! The whole catalog and every cart live in memory for the life of the
//! process. Nothing is persisted.

pub mod memory;
pub mod seed;
pub mod table;

pub use memory::MemStorage;

use std::sync::Arc;
use storefront_types::{
    Brand, CartItem, Category, InsertBrand, InsertCartItem, InsertCategory, InsertProduct,
    InsertUser, Product, ProductFilter, User,
};
use tokio::sync::RwLock;

/// Store shared by every request handler. Mutations take the write lock, so
/// each operation runs to completion before another can observe the store.
pub type SharedStore = Arc<RwLock<dyn Storage>>;

/// Data access contract for the storefront
///
/// No operation can fail: a missing record is reported as `None` and
/// deletes of absent ids are no-ops.
pub trait Storage: Send + Sync {
    // Users
    fn get_user(&self, id: i32) -> Option<User>;
    fn get_user_by_username(&self, username: &str) -> Option<User>;
    fn create_user(&mut self, user: InsertUser) -> User;

    // Products
    fn products(&self) -> Vec<Product>;
    fn product(&self, id: i32) -> Option<Product>;
    fn products_by_category(&self, category: &str) -> Vec<Product>;
    fn products_by_brand(&self, brand: &str) -> Vec<Product>;
    fn featured_products(&self) -> Vec<Product>;
    fn new_arrivals(&self) -> Vec<Product>;
    fn search_products(&self, query: &str) -> Vec<Product>;
    fn filter_products(&self, filter: &ProductFilter) -> Vec<Product>;
    fn create_product(&mut self, product: InsertProduct) -> Product;

    // Brands
    fn brands(&self) -> Vec<Brand>;
    fn brand_by_name(&self, name: &str) -> Option<Brand>;
    fn create_brand(&mut self, brand: InsertBrand) -> Brand;

    // Categories
    fn categories(&self) -> Vec<Category>;
    fn category_by_name(&self, name: &str) -> Option<Category>;
    fn create_category(&mut self, category: InsertCategory) -> Category;

    // Cart
    fn cart_items(&self, session_id: &str) -> Vec<CartItem>;
    fn cart_item(&self, id: i32) -> Option<CartItem>;
    fn add_to_cart(&mut self, item: InsertCartItem) -> CartItem;
    fn update_cart_item(&mut self, id: i32, quantity: u32) -> Option<CartItem>;
    fn remove_from_cart(&mut self, id: i32) -> usize;
    fn clear_cart(&mut self, session_id: &str) -> usize;
}

/// Wrap a store for sharing across handlers
pub fn shared<S: Storage + 'static>(store: S) -> SharedStore {
    Arc::new(RwLock::new(store))
}
