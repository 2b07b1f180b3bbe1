//! Catalog read service: products, brands and categories

use storefront_types::{Brand, Category, Product, ProductFilter};
use tracing::debug;

use crate::storage::SharedStore;

pub struct CatalogService {
    store: SharedStore,
}

impl CatalogService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_products(&self) -> Vec<Product> {
        self.store.read().await.products()
    }

    /// Products matching every set criterion; an empty filter lists everything
    pub async fn filter_products(&self, filter: &ProductFilter) -> Vec<Product> {
        if filter.is_empty() {
            return self.list_products().await;
        }
        debug!("Filtering products: {:?}", filter);
        self.store.read().await.filter_products(filter)
    }

    pub async fn get_product(&self, id: i32) -> Option<Product> {
        self.store.read().await.product(id)
    }

    pub async fn products_by_category(&self, category: &str) -> Vec<Product> {
        debug!("Listing products in category {}", category);
        self.store.read().await.products_by_category(category)
    }

    pub async fn products_by_brand(&self, brand: &str) -> Vec<Product> {
        debug!("Listing products of brand {}", brand);
        self.store.read().await.products_by_brand(brand)
    }

    pub async fn featured_products(&self) -> Vec<Product> {
        self.store.read().await.featured_products()
    }

    pub async fn new_arrivals(&self) -> Vec<Product> {
        self.store.read().await.new_arrivals()
    }

    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        let products = self.store.read().await.search_products(query);
        debug!("Search '{}' matched {} products", query, products.len());
        products
    }

    pub async fn list_brands(&self) -> Vec<Brand> {
        self.store.read().await.brands()
    }

    pub async fn get_brand(&self, name: &str) -> Option<Brand> {
        self.store.read().await.brand_by_name(name)
    }

    pub async fn list_categories(&self) -> Vec<Category> {
        self.store.read().await.categories()
    }

    pub async fn get_category(&self, name: &str) -> Option<Category> {
        self.store.read().await.category_by_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{shared, MemStorage};

    #[tokio::test]
    async fn test_lookups_against_seeded_catalog() {
        let catalog = CatalogService::new(shared(MemStorage::seeded()));

        assert_eq!(catalog.list_products().await.len(), 11);
        assert_eq!(
            catalog.get_product(5).await.map(|p| p.name),
            Some("Qita Series - Mango".to_string())
        );
        assert!(catalog.get_product(500).await.is_none());

        assert_eq!(catalog.list_brands().await.len(), 6);
        assert_eq!(
            catalog.get_brand("hotcig").await.map(|b| b.id),
            Some(6)
        );
        // JOIWAY products exist but the brand itself was never registered
        assert!(catalog.get_brand("JOIWAY").await.is_none());
        assert_eq!(catalog.products_by_brand("JOIWAY").await.len(), 1);

        assert_eq!(catalog.list_categories().await.len(), 4);
        assert!(catalog.get_category("ACCESSORIES").await.is_some());
    }

    #[tokio::test]
    async fn test_empty_filter_lists_everything() {
        let catalog = CatalogService::new(shared(MemStorage::seeded()));

        let all = catalog.filter_products(&ProductFilter::default()).await;
        assert_eq!(all, catalog.list_products().await);

        let in_budget = catalog
            .filter_products(&ProductFilter {
                category: vec!["pod systems".to_string()],
                max_price: Some(30_000_000),
                ..Default::default()
            })
            .await;
        let names: Vec<_> = in_budget.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Oneo Pod Kit"]);
    }
}
