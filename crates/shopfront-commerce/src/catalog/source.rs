//! External catalog source seam.
//!
//! The catalog data lives outside this core. A [`CatalogSource`] is the
//! read-only collaborator that produces the product list; every transport
//! failure collapses into a [`SourceError`] consumed by the store's
//! fallback path.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;

/// Failure modes of the external catalog source.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    /// Transport failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),

    /// Response body did not match the expected shape.
    #[error("malformed payload: {0}")]
    Schema(String),
}

/// A read-only provider of product records.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full product list.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;
}

/// A source backed by an in-memory product list.
///
/// Used by embedding applications that already hold their data, and by
/// tests that need a deterministic catalog.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    products: Vec<Product>,
}

impl StaticSource {
    /// Create a source over the given products.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticSource {
    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        Ok(self.products.clone())
    }
}

// Wire types for the catalog payload. The sources the storefront talks to
// disagree on details: ids may be numbers or strings, and the category is
// either a bare string or a `{"name": ...}` object. Both shapes decode.

#[derive(Debug, Deserialize)]
struct RawEnvelope {
    products: Vec<RawProduct>,
}

#[derive(Debug, Deserialize)]
struct RawProduct {
    id: RawId,
    title: String,
    price: f64,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<RawCategory>,
    #[serde(default)]
    images: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
    Number(u64),
    Text(String),
}

impl RawId {
    fn into_product_id(self) -> ProductId {
        match self {
            RawId::Number(n) => ProductId::new(n.to_string()),
            RawId::Text(s) => ProductId::new(s),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCategory {
    Name(String),
    Tagged { name: String },
}

impl RawCategory {
    fn into_name(self) -> String {
        match self {
            RawCategory::Name(name) => name,
            RawCategory::Tagged { name } => name,
        }
    }
}

/// Decode a `{"products": [...]}` payload into product records.
///
/// Validation failures are [`SourceError::Schema`]: empty or duplicate ids,
/// empty titles, and negative or non-finite prices all reject the whole
/// payload (the store never keeps a partial snapshot).
pub fn decode_payload(payload: &str, currency: Currency) -> Result<Vec<Product>, SourceError> {
    let envelope: RawEnvelope =
        serde_json::from_str(payload).map_err(|e| SourceError::Schema(e.to_string()))?;

    let mut seen: HashSet<ProductId> = HashSet::new();
    let mut products = Vec::with_capacity(envelope.products.len());

    for raw in envelope.products {
        let id = raw.id.into_product_id();
        if id.as_str().is_empty() {
            return Err(SourceError::Schema("empty product id".to_string()));
        }
        if !seen.insert(id.clone()) {
            return Err(SourceError::Schema(format!("duplicate product id: {id}")));
        }
        if raw.title.trim().is_empty() {
            return Err(SourceError::Schema(format!("empty title for product {id}")));
        }
        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(SourceError::Schema(format!(
                "invalid price {} for product {id}",
                raw.price
            )));
        }

        let category = raw.category.map(RawCategory::into_name).unwrap_or_default();
        products.push(
            Product::new(id, raw.title, Money::from_decimal(raw.price, currency))
                .with_description(raw.description)
                .with_category(category)
                .with_images(raw.images),
        );
    }

    Ok(products)
}
