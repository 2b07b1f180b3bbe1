//! Product types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::cart::ValidationError;

/// Catalog product
///
/// Prices are integers in the smallest currency unit. `rating` encodes a
/// five star scale with one decimal digit (45 means 4.5 stars).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: u64,
    pub discount_price: Option<u64>,
    pub brand: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub images: Vec<String>,
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub is_new_arrival: bool,
    pub is_featured: bool,
    pub rating: u32,
    pub review_count: u32,
    pub specifications: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Product creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertProduct {
    pub name: String,
    pub description: String,
    pub price: u64,
    #[serde(default)]
    pub discount_price: Option<u64>,
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    #[serde(default)]
    pub is_new_arrival: bool,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub rating: u32,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub specifications: BTreeMap<String, String>,
}

fn default_in_stock() -> bool {
    true
}

impl Product {
    pub fn from_insert(id: i32, insert: InsertProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: insert.name,
            description: insert.description,
            price: insert.price,
            discount_price: insert.discount_price,
            brand: insert.brand,
            category: insert.category,
            subcategory: insert.subcategory,
            images: insert.images,
            colors: insert.colors,
            in_stock: insert.in_stock,
            is_new_arrival: insert.is_new_arrival,
            is_featured: insert.is_featured,
            rating: insert.rating,
            review_count: insert.review_count,
            specifications: insert.specifications,
            created_at,
        }
    }

    /// Price charged at checkout: the discount price when one is set
    pub fn effective_price(&self) -> u64 {
        self.discount_price.unwrap_or(self.price)
    }

    /// Case-insensitive exact match on the category name
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }

    /// Case-insensitive exact match on the brand name
    pub fn of_brand(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.to_lowercase()
    }

    /// Case-insensitive substring match against name, description or brand.
    ///
    /// `lower_query` must already be lowercased.
    pub fn matches_query(&self, lower_query: &str) -> bool {
        self.name.to_lowercase().contains(lower_query)
            || self.description.to_lowercase().contains(lower_query)
            || self.brand.to_lowercase().contains(lower_query)
    }
}

/// Optional product listing filters, taken from the query string
///
/// `brand` and `category` may repeat or hold comma-separated lists; a product
/// matches when it matches any listed name. `inStock` and `onSale` only narrow
/// the listing when true.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    #[serde(default)]
    pub brand: Vec<String>,
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub in_stock: bool,
    #[serde(default)]
    pub on_sale: bool,
    #[serde(default)]
    pub min_price: Option<u64>,
    #[serde(default)]
    pub max_price: Option<u64>,
}

/// Non-blank names across all entries, with comma-separated entries split apart
fn listed(values: &[String]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn any_listed(values: &[String], matches: impl Fn(&str) -> bool) -> bool {
    let mut names = listed(values).peekable();
    names.peek().is_none() || names.any(matches)
}

impl ProductFilter {
    /// True when no criterion is set, i.e. the filter matches every product
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ValidationError::InvalidPriceRange { min, max });
            }
        }
        Ok(())
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !any_listed(&self.brand, |b| product.of_brand(b)) {
            return false;
        }
        if !any_listed(&self.category, |c| product.in_category(c)) {
            return false;
        }
        if self.in_stock && !product.in_stock {
            return false;
        }
        if self.on_sale && product.discount_price.is_none() {
            return false;
        }

        let price = product.effective_price();
        self.min_price.map_or(true, |min| price >= min)
            && self.max_price.map_or(true, |max| price <= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, brand: &str, price: u64, discount_price: Option<u64>) -> Product {
        Product::from_insert(
            1,
            InsertProduct {
                name: name.to_string(),
                description: format!("{} by {}", name, brand),
                price,
                discount_price,
                brand: brand.to_string(),
                category: "Pod Systems".to_string(),
                subcategory: None,
                images: vec![],
                colors: vec![],
                in_stock: true,
                is_new_arrival: false,
                is_featured: false,
                rating: 0,
                review_count: 0,
                specifications: BTreeMap::new(),
            },
            Utc::now(),
        )
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        assert_eq!(product("A", "OXVA", 100, None).effective_price(), 100);
        assert_eq!(product("B", "OXVA", 100, Some(80)).effective_price(), 80);
    }

    #[test]
    fn test_matches_query_checks_brand() {
        let p = product("Vprime Pro", "OXVA", 100, None);
        assert!(p.matches_query("oxva"));
        assert!(p.matches_query("prime"));
        assert!(!p.matches_query("mango"));
    }

    #[test]
    fn test_filter_combines_criteria() {
        let p = product("Ghost Rabbit", "JOIWAY", 400, Some(380));

        assert!(ProductFilter::default().matches(&p));

        let filter = ProductFilter {
            brand: vec!["joiway".to_string()],
            on_sale: true,
            max_price: Some(380),
            ..Default::default()
        };
        assert!(filter.matches(&p));

        let filter = ProductFilter {
            min_price: Some(390),
            ..Default::default()
        };
        assert!(!filter.matches(&p), "min price applies to the discounted price");

        let filter = ProductFilter {
            category: vec!["Box Mods".to_string()],
            ..Default::default()
        };
        assert!(!filter.matches(&p));
    }

    #[test]
    fn test_filter_matches_any_listed_brand() {
        let oxva = product("Oneo Pod Kit", "OXVA", 290, None);
        let jax = product("Qita Mango", "JAX", 65, None);
        let lunix = product("Mr Pro", "LUNIX", 520, None);

        let filter: ProductFilter =
            serde_json::from_value(serde_json::json!({ "brand": ["oxva", "JAX"] })).unwrap();
        assert!(filter.matches(&oxva));
        assert!(filter.matches(&jax));
        assert!(!filter.matches(&lunix));

        let filter = ProductFilter {
            brand: vec!["oxva, jax".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&oxva));
        assert!(filter.matches(&jax));
        assert!(!filter.matches(&lunix));

        let filter = ProductFilter {
            brand: vec![" , ".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&lunix));
    }

    #[test]
    fn test_false_flags_do_not_filter() {
        let mut sold_out = product("Ghost Rabbit", "JOIWAY", 400, None);
        sold_out.in_stock = false;

        let filter: ProductFilter = serde_json::from_value(serde_json::json!({
            "inStock": false,
            "onSale": false
        }))
        .unwrap();
        assert!(filter.is_empty());
        assert!(filter.matches(&sold_out));

        let filter = ProductFilter {
            in_stock: true,
            ..Default::default()
        };
        assert!(!filter.matches(&sold_out));

        let filter = ProductFilter {
            on_sale: true,
            ..Default::default()
        };
        assert!(!filter.matches(&sold_out));
    }

    #[test]
    fn test_filter_rejects_inverted_price_range() {
        let filter = ProductFilter {
            min_price: Some(10),
            max_price: Some(5),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
        assert!(ProductFilter::default().validate().is_ok());
        assert!(ProductFilter::default().is_empty());
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_insert_defaults() {
        let insert: InsertProduct = serde_json::from_value(serde_json::json!({
            "name": "Oneo Pod Kit",
            "description": "Sleek pod kit",
            "price": 29000000,
            "brand": "OXVA",
            "category": "Pod Systems"
        }))
        .unwrap();

        assert!(insert.in_stock);
        assert!(!insert.is_featured);
        assert!(insert.images.is_empty());
        assert_eq!(insert.rating, 0);
    }
}
