//! Product records held by the catalog.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog snapshot.
///
/// Immutable once loaded; the catalog store owns every instance. Anything
/// else in the system refers to a product by its [`ProductId`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique, stable identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price. Never negative for loaded products.
    pub price: Money,
    /// Long-form description.
    pub description: String,
    /// Category name, used for browsing and search.
    pub category: String,
    /// Image references in display order. May be empty.
    pub images: Vec<String>,
}

impl Product {
    /// Create a product with empty description, category, and images.
    pub fn new(id: ProductId, title: impl Into<String>, price: Money) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            description: String::new(),
            category: String::new(),
            images: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category name.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the image references.
    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = images;
        self
    }

    /// Format the price at currency precision (presentation only).
    pub fn price_display(&self) -> String {
        self.price.display()
    }

    /// The first image reference, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_builder() {
        let product = Product::new(
            ProductId::new("1"),
            "Wireless Headphones",
            Money::new(4999, Currency::USD),
        )
        .with_category("Audio")
        .with_images(vec!["https://img.example/1.jpg".to_string()]);

        assert_eq!(product.title, "Wireless Headphones");
        assert_eq!(product.category, "Audio");
        assert_eq!(product.primary_image(), Some("https://img.example/1.jpg"));
    }

    #[test]
    fn test_price_display() {
        let product = Product::new(ProductId::new("1"), "Mug", Money::new(899, Currency::USD));
        assert_eq!(product.price_display(), "$8.99");
    }

    #[test]
    fn test_primary_image_empty() {
        let product = Product::new(ProductId::new("1"), "Mug", Money::new(899, Currency::USD));
        assert_eq!(product.primary_image(), None);
    }
}
