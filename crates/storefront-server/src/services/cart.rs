//! Cart service
//!
//! Joins cart lines with their products on the way out; the joined view is
//! never written back to the store.

use storefront_types::{CartItem, CartItemWithProduct, CartSummary, InsertCartItem};
use tracing::{debug, info};

use crate::storage::{SharedStore, Storage};

pub struct CartService {
    store: SharedStore,
}

impl CartService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    fn with_product(store: &dyn Storage, item: CartItem) -> CartItemWithProduct {
        let product = store.product(item.product_id);
        CartItemWithProduct { item, product }
    }

    pub async fn list(&self, session_id: &str) -> Vec<CartItemWithProduct> {
        let store = self.store.read().await;
        let items = store.cart_items(session_id);
        debug!("Cart {} has {} lines", session_id, items.len());
        items
            .into_iter()
            .map(|item| Self::with_product(&*store, item))
            .collect()
    }

    pub async fn summary(&self, session_id: &str) -> CartSummary {
        let lines = self.list(session_id).await;
        CartSummary::from_lines(session_id, &lines)
    }

    /// Add a line, merging into an existing one for the same product, session and color
    pub async fn add(&self, item: InsertCartItem) -> CartItemWithProduct {
        let mut store = self.store.write().await;
        info!(
            "Adding to cart: session={}, product={}, quantity={}, color={:?}",
            item.session_id, item.product_id, item.quantity, item.color
        );
        let item = store.add_to_cart(item);
        Self::with_product(&*store, item)
    }

    pub async fn update_quantity(&self, id: i32, quantity: u32) -> Option<CartItemWithProduct> {
        let mut store = self.store.write().await;
        info!("Updating cart item {} quantity to {}", id, quantity);
        let item = store.update_cart_item(id, quantity)?;
        Some(Self::with_product(&*store, item))
    }

    pub async fn remove(&self, id: i32) {
        let removed = self.store.write().await.remove_from_cart(id);
        info!("Removing cart item {} (removed {})", id, removed);
    }

    pub async fn clear(&self, session_id: &str) {
        let removed = self.store.write().await.clear_cart(session_id);
        info!("Cleared cart {}: {} lines removed", session_id, removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemStorage};
    use storefront_types::GUEST_SESSION_ID;

    fn line(product_id: i32, quantity: u32) -> InsertCartItem {
        InsertCartItem {
            user_id: None,
            product_id,
            quantity,
            color: None,
            session_id: GUEST_SESSION_ID.to_string(),
        }
    }

    #[tokio::test]
    async fn test_add_joins_product() {
        let cart = CartService::new(shared(MemStorage::seeded()));

        let added = cart.add(line(1, 1)).await;
        assert_eq!(added.product.map(|p| p.name), Some("Vprime Pro".to_string()));

        let dangling = cart.add(line(999, 1)).await;
        assert!(dangling.product.is_none());
    }

    #[tokio::test]
    async fn test_summary_uses_effective_price() {
        let cart = CartService::new(shared(MemStorage::seeded()));

        // Vprime Pro at full price, Ghost Rabbit at its discount price
        cart.add(line(1, 2)).await;
        cart.add(line(2, 1)).await;
        cart.add(line(999, 4)).await;

        let summary = cart.summary(GUEST_SESSION_ID).await;
        assert_eq!(summary.line_count, 3);
        assert_eq!(summary.item_count, 7);
        assert_eq!(summary.subtotal, 2 * 45_000_000 + 42_000_000);
    }

    #[tokio::test]
    async fn test_update_and_clear() {
        let cart = CartService::new(shared(MemStorage::seeded()));
        let added = cart.add(line(3, 1)).await;

        let updated = cart.update_quantity(added.item.id, 4).await.unwrap();
        assert_eq!(updated.item.quantity, 4);
        assert!(cart.update_quantity(added.item.id + 1, 4).await.is_none());

        cart.remove(added.item.id).await;
        cart.remove(added.item.id).await;
        assert!(cart.list(GUEST_SESSION_ID).await.is_empty());

        cart.add(line(3, 1)).await;
        cart.clear(GUEST_SESSION_ID).await;
        assert!(cart.list(GUEST_SESSION_ID).await.is_empty());
    }
}
