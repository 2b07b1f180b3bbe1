//! Sample catalog loaded at startup

use std::collections::BTreeMap;
use storefront_types::{InsertBrand, InsertCategory, InsertProduct};
use tracing::debug;

use super::Storage;

const BRANDS: &[(&str, &str)] = &[
    ("OXVA", "Premium vaping devices"),
    ("JAX", "Quality e-liquids and pods"),
    ("LUNIX", "Innovative RGB box mods"),
    ("NIXX", "Filter pod systems"),
    ("PANDA", "Unique design vape devices"),
    ("HOTCIG", "High-performance mods"),
];

// name, description, icon, product count
const CATEGORIES: &[(&str, &str, &str, u32)] = &[
    ("Pod Systems", "Compact, portable vaping solutions", "tablet", 42),
    (
        "Box Mods",
        "Advanced vaping devices with customizable settings",
        "box",
        28,
    ),
    ("E-Liquids", "Premium flavors for every taste", "droplet", 56),
    (
        "Accessories",
        "Everything you need for the perfect setup",
        "tool",
        35,
    ),
];

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    price: u64,
    discount_price: Option<u64>,
    brand: &'static str,
    category: &'static str,
    subcategory: Option<&'static str>,
    image_label: &'static str,
    colors: &'static [&'static str],
    is_new_arrival: bool,
    is_featured: bool,
    rating: u32,
    review_count: u32,
    specifications: &'static [(&'static str, &'static str)],
}

const E_LIQUID_SPECS: &[(&str, &str)] = &[
    ("volume", "30ml"),
    ("nicotine", "3mg, 6mg"),
    ("vgpg", "70/30"),
];

const PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        name: "Vprime Pro",
        description: "The OXVA Vprime is a compact pod system with excellent performance and battery life, perfect for both beginners and experienced vapers.",
        price: 45_000_000,
        discount_price: None,
        brand: "OXVA",
        category: "Pod Systems",
        subcategory: None,
        image_label: "OXVA+Vprime",
        colors: &[
            "blue", "black", "pink", "green", "red", "purple", "gold", "silver", "white", "teal",
        ],
        is_new_arrival: true,
        is_featured: true,
        rating: 45,
        review_count: 42,
        specifications: &[("battery", "1500mAh"), ("wattage", "5-40W"), ("capacity", "4.5ml")],
    },
    SeedProduct {
        name: "Ghost Rabbit",
        description: "The Joiway Ghost Rabbit features unique design and good performance in a compact package.",
        price: 38_000_000,
        discount_price: Some(42_000_000),
        brand: "JOIWAY",
        category: "Pod Systems",
        subcategory: None,
        image_label: "Ghost+Rabbit",
        colors: &["blue", "pink"],
        is_new_arrival: true,
        is_featured: false,
        rating: 40,
        review_count: 28,
        specifications: &[("battery", "1200mAh"), ("wattage", "5-25W"), ("capacity", "3ml")],
    },
    SeedProduct {
        name: "Mr Pro RGB Edition",
        description: "The Lunix Mr Pro features vibrant RGB lighting and an innovative square design that stands out from the crowd.",
        price: 52_000_000,
        discount_price: None,
        brand: "LUNIX",
        category: "Pod Systems",
        subcategory: None,
        image_label: "Lunix+Mr+Pro",
        colors: &["red", "white", "purple", "black"],
        is_new_arrival: true,
        is_featured: false,
        rating: 43,
        review_count: 32,
        specifications: &[("battery", "1800mAh"), ("wattage", "5-60W"), ("capacity", "5ml")],
    },
    SeedProduct {
        name: "VEE 2 Limited Edition",
        description: "The Panda VEE 2 Limited Edition features creative artwork and a powerful battery for all-day vaping.",
        price: 49_000_000,
        discount_price: None,
        brand: "PANDA",
        category: "Pod Systems",
        subcategory: None,
        image_label: "Panda+VEE+2",
        colors: &["green", "blue", "black"],
        is_new_arrival: true,
        is_featured: false,
        rating: 42,
        review_count: 25,
        specifications: &[("battery", "1600mAh"), ("wattage", "5-45W"), ("capacity", "4ml")],
    },
    SeedProduct {
        name: "Qita Series - Mango",
        description: "A burst of flavor styled for amazing people. The JAX Qita Series Mango offers a tropical experience in every puff.",
        price: 6_500_000,
        discount_price: None,
        brand: "JAX",
        category: "E-Liquids",
        subcategory: Some("Fruit"),
        image_label: "Qita+Mango",
        colors: &[],
        is_new_arrival: false,
        is_featured: true,
        rating: 45,
        review_count: 42,
        specifications: E_LIQUID_SPECS,
    },
    SeedProduct {
        name: "Qita Series - Jasmine Tea",
        description: "A refreshing jasmine tea flavor with subtle sweet notes. Perfect for an all-day vape.",
        price: 6_500_000,
        discount_price: None,
        brand: "JAX",
        category: "E-Liquids",
        subcategory: Some("Beverage"),
        image_label: "Qita+Jasmine",
        colors: &[],
        is_new_arrival: false,
        is_featured: true,
        rating: 44,
        review_count: 38,
        specifications: E_LIQUID_SPECS,
    },
    SeedProduct {
        name: "Qita Series - Matcha Tea",
        description: "A perfect blend of authentic matcha tea flavor with light sweetness for a satisfying vape experience.",
        price: 6_500_000,
        discount_price: None,
        brand: "JAX",
        category: "E-Liquids",
        subcategory: Some("Beverage"),
        image_label: "Qita+Matcha",
        colors: &[],
        is_new_arrival: false,
        is_featured: true,
        rating: 43,
        review_count: 35,
        specifications: E_LIQUID_SPECS,
    },
    SeedProduct {
        name: "R234 Pro Electrical Mod",
        description: "The HOTCIG R234 Pro is a high-performance box mod with customizable settings and excellent build quality.",
        price: 75_000_000,
        discount_price: Some(85_000_000),
        brand: "HOTCIG",
        category: "Box Mods",
        subcategory: None,
        image_label: "HOTCIG+R234",
        colors: &["black", "silver"],
        is_new_arrival: false,
        is_featured: true,
        rating: 50,
        review_count: 28,
        specifications: &[
            ("battery", "Dual 18650"),
            ("wattage", "5-234W"),
            ("temperature", "200°F-600°F"),
        ],
    },
    SeedProduct {
        name: "Filter Plus Pod Kit",
        description: "The NIXX Filter Plus pod kit offers a clean, filtered vaping experience in a sleek, portable design.",
        price: 32_500_000,
        discount_price: None,
        brand: "NIXX",
        category: "Pod Systems",
        subcategory: None,
        image_label: "NIXX+Filter",
        colors: &["blue", "green", "orange", "black", "silver"],
        is_new_arrival: false,
        is_featured: true,
        rating: 40,
        review_count: 16,
        specifications: &[("battery", "850mAh"), ("wattage", "Auto"), ("capacity", "2ml")],
    },
    SeedProduct {
        name: "RTA 24mm Tank",
        description: "The Nitrous RTA 24mm tank offers superior flavor and vapor production for enthusiasts.",
        price: 32_000_000,
        discount_price: None,
        brand: "NITROUS",
        category: "Accessories",
        subcategory: Some("Tanks"),
        image_label: "Nitrous+RTA",
        colors: &["silver", "black", "gunmetal"],
        is_new_arrival: false,
        is_featured: true,
        rating: 35,
        review_count: 12,
        specifications: &[
            ("diameter", "24mm"),
            ("capacity", "5ml"),
            ("deck", "Single/Dual Coil"),
        ],
    },
    SeedProduct {
        name: "Oneo Pod Kit",
        description: "The OXVA Oneo is a sleek pod kit with multiple color options and excellent flavor production.",
        price: 29_000_000,
        discount_price: None,
        brand: "OXVA",
        category: "Pod Systems",
        subcategory: None,
        image_label: "OXVA+Oneo",
        colors: &[
            "green", "orange", "red", "blue", "black", "pink", "grey", "teal", "purple", "brown",
        ],
        is_new_arrival: false,
        is_featured: false,
        rating: 42,
        review_count: 22,
        specifications: &[("battery", "900mAh"), ("wattage", "Auto"), ("capacity", "2ml")],
    },
];

impl SeedProduct {
    fn to_insert(&self) -> InsertProduct {
        InsertProduct {
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: self.price,
            discount_price: self.discount_price,
            brand: self.brand.to_string(),
            category: self.category.to_string(),
            subcategory: self.subcategory.map(str::to_string),
            images: vec![format!(
                "https://via.placeholder.com/400x400/121212/ffffff?text={}",
                self.image_label
            )],
            colors: self.colors.iter().map(|c| c.to_string()).collect(),
            in_stock: true,
            is_new_arrival: self.is_new_arrival,
            is_featured: self.is_featured,
            rating: self.rating,
            review_count: self.review_count,
            specifications: self
                .specifications
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<BTreeMap<_, _>>(),
        }
    }
}

/// Insert the sample brands, categories and products
pub fn populate(store: &mut dyn Storage) {
    for (name, description) in BRANDS {
        store.create_brand(InsertBrand {
            name: name.to_string(),
            logo: Some(name.to_string()),
            description: Some(description.to_string()),
        });
    }

    for (name, description, icon, product_count) in CATEGORIES {
        store.create_category(InsertCategory {
            name: name.to_string(),
            description: Some(description.to_string()),
            icon: Some(icon.to_string()),
            product_count: *product_count,
        });
    }

    for product in PRODUCTS {
        store.create_product(product.to_insert());
    }

    debug!(
        "Seeded catalog: {} brands, {} categories, {} products",
        BRANDS.len(),
        CATEGORIES.len(),
        PRODUCTS.len()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemStorage;

    #[test]
    fn test_populate_assigns_ids_in_order() {
        let mut store = MemStorage::new();
        populate(&mut store);

        let brands = store.brands();
        assert_eq!(brands.len(), BRANDS.len());
        assert_eq!(brands[0].id, 1);
        assert_eq!(brands[0].name, "OXVA");

        let products = store.products();
        assert_eq!(products.len(), PRODUCTS.len());
        assert_eq!(products.last().map(|p| p.id), Some(11));
        assert_eq!(
            products[0].specifications.get("battery").map(String::as_str),
            Some("1500mAh")
        );
        assert!(products.iter().all(|p| p.in_stock));
    }
}
