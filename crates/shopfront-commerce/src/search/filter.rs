//! Free-text catalog filter.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Case-insensitive substring filter over product titles and categories.
///
/// Matching is pure: the filter holds only the query text and recomputes
/// its view on every application. An empty query matches everything. The
/// output is a stable filter of the input: original relative order is
/// preserved, never sorted. This contract must hold even if a real index
/// ever backs it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    /// Create an empty (match-all) filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the query text.
    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether the query is empty (matches everything).
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }

    /// Whether a single product matches the query.
    pub fn matches(&self, product: &Product) -> bool {
        self.query.is_empty() || matches_needle(product, &self.query.to_lowercase())
    }

    /// The products matching the query, in catalog order.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        if self.query.is_empty() {
            return products.iter().collect();
        }
        let needle = self.query.to_lowercase();
        products
            .iter()
            .filter(|p| matches_needle(p, &needle))
            .collect()
    }
}

fn matches_needle(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}
