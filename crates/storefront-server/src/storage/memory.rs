//! In-memory store

use chrono::Utc;
use storefront_types::{
    Brand, CartItem, Category, InsertBrand, InsertCartItem, InsertCategory, InsertProduct,
    InsertUser, Product, ProductFilter, User,
};

use super::seed;
use super::table::Table;
use super::Storage;

/// All storefront records, one table per entity
#[derive(Debug, Default)]
pub struct MemStorage {
    users: Table<User>,
    products: Table<Product>,
    brands: Table<Brand>,
    categories: Table<Category>,
    cart_items: Table<CartItem>,
}

impl MemStorage {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store populated with the sample catalog
    pub fn seeded() -> Self {
        let mut store = Self::new();
        seed::populate(&mut store);
        store
    }
}

impl Storage for MemStorage {
    fn get_user(&self, id: i32) -> Option<User> {
        self.users.get(id).cloned()
    }

    fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users.find(|u| u.username == username).cloned()
    }

    fn create_user(&mut self, user: InsertUser) -> User {
        self.users.insert_with(|id| User::from_insert(id, user))
    }

    fn products(&self) -> Vec<Product> {
        self.products.all()
    }

    fn product(&self, id: i32) -> Option<Product> {
        self.products.get(id).cloned()
    }

    fn products_by_category(&self, category: &str) -> Vec<Product> {
        self.products.filter(|p| p.in_category(category))
    }

    fn products_by_brand(&self, brand: &str) -> Vec<Product> {
        self.products.filter(|p| p.of_brand(brand))
    }

    fn featured_products(&self) -> Vec<Product> {
        self.products.filter(|p| p.is_featured)
    }

    fn new_arrivals(&self) -> Vec<Product> {
        self.products.filter(|p| p.is_new_arrival)
    }

    fn search_products(&self, query: &str) -> Vec<Product> {
        let lower_query = query.to_lowercase();
        self.products.filter(|p| p.matches_query(&lower_query))
    }

    fn filter_products(&self, filter: &ProductFilter) -> Vec<Product> {
        self.products.filter(|p| filter.matches(p))
    }

    fn create_product(&mut self, product: InsertProduct) -> Product {
        self.products
            .insert_with(|id| Product::from_insert(id, product, Utc::now()))
    }

    fn brands(&self) -> Vec<Brand> {
        self.brands.all()
    }

    fn brand_by_name(&self, name: &str) -> Option<Brand> {
        self.brands.find(|b| b.has_name(name)).cloned()
    }

    fn create_brand(&mut self, brand: InsertBrand) -> Brand {
        self.brands.insert_with(|id| Brand::from_insert(id, brand))
    }

    fn categories(&self) -> Vec<Category> {
        self.categories.all()
    }

    fn category_by_name(&self, name: &str) -> Option<Category> {
        self.categories.find(|c| c.has_name(name)).cloned()
    }

    fn create_category(&mut self, category: InsertCategory) -> Category {
        self.categories
            .insert_with(|id| Category::from_insert(id, category))
    }

    fn cart_items(&self, session_id: &str) -> Vec<CartItem> {
        self.cart_items.filter(|item| item.session_id == session_id)
    }

    fn cart_item(&self, id: i32) -> Option<CartItem> {
        self.cart_items.get(id).cloned()
    }

    fn add_to_cart(&mut self, item: InsertCartItem) -> CartItem {
        // Same product, session and color: merge quantities into the existing line
        if let Some(existing) = self.cart_items.iter_mut().find(|e| e.same_entry(&item)) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return existing.clone();
        }

        self.cart_items
            .insert_with(|id| CartItem::from_insert(id, item))
    }

    fn update_cart_item(&mut self, id: i32, quantity: u32) -> Option<CartItem> {
        let item = self.cart_items.get_mut(id)?;
        item.quantity = quantity;
        Some(item.clone())
    }

    fn remove_from_cart(&mut self, id: i32) -> usize {
        usize::from(self.cart_items.remove(id).is_some())
    }

    fn clear_cart(&mut self, session_id: &str) -> usize {
        self.cart_items
            .remove_where(|item| item.session_id == session_id)
    }
}
