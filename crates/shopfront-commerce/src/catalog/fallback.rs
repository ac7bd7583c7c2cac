//! Built-in fallback dataset.
//!
//! When the external source is unavailable the store substitutes this fixed
//! list so the storefront still renders something browsable. Six products
//! across three categories: enough for two pages at the default page size
//! and for category search to return distinct subsets.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};

/// The fixed product list used when the catalog source is unavailable.
pub fn fallback_products(currency: Currency) -> Vec<Product> {
    vec![
        Product::new(
            ProductId::new("1"),
            "Aurora Wireless Headphones",
            Money::new(7999, currency),
        )
        .with_description("Over-ear wireless headphones with a 30-hour battery.")
        .with_category("Audio")
        .with_images(vec!["https://img.shopfront.test/aurora.jpg".to_string()]),
        Product::new(
            ProductId::new("2"),
            "Pebble Bluetooth Speaker",
            Money::new(3499, currency),
        )
        .with_description("Palm-sized speaker with surprising low end.")
        .with_category("Audio")
        .with_images(vec!["https://img.shopfront.test/pebble.jpg".to_string()]),
        Product::new(
            ProductId::new("3"),
            "Glacier Insulated Bottle",
            Money::new(2450, currency),
        )
        .with_description("Keeps drinks cold for 24 hours, hot for 12.")
        .with_category("Kitchen")
        .with_images(vec!["https://img.shopfront.test/glacier.jpg".to_string()]),
        Product::new(
            ProductId::new("4"),
            "Ember Pour-Over Kettle",
            Money::new(5600, currency),
        )
        .with_description("Gooseneck kettle with a thermometer in the lid.")
        .with_category("Kitchen")
        .with_images(vec!["https://img.shopfront.test/ember.jpg".to_string()]),
        Product::new(
            ProductId::new("5"),
            "Drift Mechanical Keyboard",
            Money::new(11900, currency),
        )
        .with_description("Tenkeyless board with hot-swappable switches.")
        .with_category("Office")
        .with_images(vec!["https://img.shopfront.test/drift.jpg".to_string()]),
        Product::new(
            ProductId::new("6"),
            "Slate Desk Mat",
            Money::new(1899, currency),
        )
        .with_description("Wool-felt mat sized for a keyboard and mouse.")
        .with_category("Office")
        .with_images(vec!["https://img.shopfront.test/slate.jpg".to_string()]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_ids_are_unique() {
        let products = fallback_products(Currency::USD);
        let mut ids: Vec<_> = products.iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), products.len());
    }

    #[test]
    fn test_fallback_prices_are_non_negative() {
        for product in fallback_products(Currency::USD) {
            assert!(!product.price.is_negative());
        }
    }

    #[test]
    fn test_fallback_spans_multiple_pages() {
        // Two pages at the default page size of 4.
        assert!(fallback_products(Currency::USD).len() > 4);
    }
}
