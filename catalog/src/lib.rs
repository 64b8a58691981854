//! # Catalog
//!
//! The immutable product table, keyed by product id. Both pages resolve
//! products through [`get`]; an unknown key is a normal, expected outcome
//! (the detail page shows its "not found" state), never an error.

use std::{collections::HashMap, sync::LazyLock};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub price_naira: u64,
    pub description: &'static str,
    pub image: &'static str,
}

static PRODUCTS: LazyLock<HashMap<&'static str, Product>> = LazyLock::new(|| {
    HashMap::from([
        (
            "casio",
            Product {
                name: "Casio Classic",
                price_naira: 55_000,
                description: "Timeless Casio — lightweight, reliable and great for everyday wear.",
                image: "images/casio.jpg",
            },
        ),
        (
            "gshock",
            Product {
                name: "G-Shock Explorer",
                price_naira: 45_000,
                description: "Rugged G-Shock built to take shocks, water and adventures.",
                image: "images/gshock.jpg.JPG",
            },
        ),
        (
            "navi",
            Product {
                name: "NaviForce Sport",
                price_naira: 75_000,
                description: "Sporty NaviForce — precise, durable and stylish for active days.",
                image: "images/Navi.jpg",
            },
        ),
        (
            "patek",
            Product {
                name: "Patek Elegance",
                price_naira: 85_000,
                description: "Refined Patek-style design with dressy details and presence.",
                image: "images/patek.1.jpg",
            },
        ),
        (
            "rewa",
            Product {
                name: "Reward VIP",
                price_naira: 65_000,
                description: "Reward VIP — attention-grabbing look with premium finishes.",
                image: "images/rewa.jpg.JPG",
            },
        ),
        (
            "rolex",
            Product {
                name: "Rolex Prestige",
                price_naira: 250_000,
                description: "Rolex-level styling that signals craftsmanship and status.",
                image: "images/rolex.jpg.JPG",
            },
        ),
        (
            "smart",
            Product {
                name: "Smart Watch HR12",
                price_naira: 40_000,
                description: "HR12 Smart — notifications, health tracking and modern looks.",
                image: "images/smart.jpg.JPG",
            },
        ),
    ])
});

pub fn get(key: &str) -> Option<&'static Product> {
    PRODUCTS.get(key)
}

#[cfg(test)]
mod tests {
    use super::get;

    #[test]
    fn test_known_key() {
        let product = get("casio").unwrap();
        assert_eq!(product.name, "Casio Classic");
        assert_eq!(product.price_naira, 55_000);
    }

    #[test]
    fn test_unknown_key() {
        assert!(get("seiko").is_none());
        assert!(get("").is_none());
    }

    #[test]
    fn test_full_table() {
        for key in ["casio", "gshock", "navi", "patek", "rewa", "rolex", "smart"] {
            let product = get(key).unwrap();
            assert!(!product.name.is_empty());
            assert!(product.price_naira > 0);
        }
    }
}
