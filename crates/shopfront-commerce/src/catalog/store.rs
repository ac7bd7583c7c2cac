//! Catalog store: one load per session, fallback on failure.

use crate::catalog::{fallback_products, CatalogSource, Product};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::Currency;
use tracing::{info, warn};

/// Lifecycle of the catalog snapshot.
///
/// The store is never in a partial state: it is loading, holding live data,
/// or holding the fallback dataset with the failure reason attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Initial state, before `load` resolves.
    Loading,
    /// Live data from the external source.
    Live,
    /// Built-in dataset substituted after a source failure.
    Fallback { reason: String },
}

impl CatalogStatus {
    /// Whether the load has resolved (live or fallback).
    pub fn is_ready(&self) -> bool {
        !matches!(self, CatalogStatus::Loading)
    }

    /// The non-fatal notice to surface, if the source was unavailable.
    pub fn notice(&self) -> Option<&str> {
        match self {
            CatalogStatus::Fallback { reason } => Some(reason),
            _ => None,
        }
    }
}

/// Owns the list of products known to the session.
#[derive(Debug)]
pub struct CatalogStore {
    products: Vec<Product>,
    status: CatalogStatus,
    currency: Currency,
}

impl CatalogStore {
    /// Create an empty, loading store.
    pub fn new(currency: Currency) -> Self {
        Self {
            products: Vec::new(),
            status: CatalogStatus::Loading,
            currency,
        }
    }

    /// Load the catalog from the external source, exactly once.
    ///
    /// On success the snapshot is replaced verbatim with the source data.
    /// On any source failure the fallback dataset is substituted and the
    /// failure reason recorded as a visible notice; the load itself still
    /// resolves. A second call is rejected; the store never refetches.
    pub async fn load(
        &mut self,
        source: &dyn CatalogSource,
    ) -> Result<&CatalogStatus, CommerceError> {
        if self.status.is_ready() {
            return Err(CommerceError::CatalogAlreadyLoaded);
        }

        match source.fetch().await {
            Ok(products) => {
                info!(count = products.len(), "catalog loaded from source");
                self.products = products;
                self.status = CatalogStatus::Live;
            }
            Err(err) => {
                warn!(%err, "catalog source unavailable, using fallback dataset");
                self.products = fallback_products(self.currency);
                self.status = CatalogStatus::Fallback {
                    reason: err.to_string(),
                };
            }
        }

        Ok(&self.status)
    }

    /// The current snapshot.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Whether the snapshot contains the id.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// The store's lifecycle state.
    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    /// Whether the initial load is still pending.
    pub fn is_loading(&self) -> bool {
        !self.status.is_ready()
    }

    /// The non-fatal source-failure notice, if any.
    pub fn notice(&self) -> Option<&str> {
        self.status.notice()
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SourceError, StaticSource};
    use crate::money::Money;
    use async_trait::async_trait;

    struct FailingSource(SourceError);

    #[async_trait]
    impl CatalogSource for FailingSource {
        async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
            Err(self.0.clone())
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            Product::new(ProductId::new("1"), "Mug", Money::new(899, Currency::USD)),
            Product::new(ProductId::new("2"), "Lamp", Money::new(1299, Currency::USD)),
        ]
    }

    #[test]
    fn test_store_starts_loading() {
        let store = CatalogStore::new(Currency::USD);
        assert!(store.is_loading());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_load_from_source() {
        let mut store = CatalogStore::new(Currency::USD);
        let source = StaticSource::new(sample_products());

        let status = store.load(&source).await.unwrap();
        assert_eq!(*status, CatalogStatus::Live);
        assert_eq!(store.len(), 2);
        assert!(store.notice().is_none());
        assert!(store.contains(&ProductId::new("2")));
    }

    #[tokio::test]
    async fn test_load_failure_substitutes_fallback() {
        for err in [
            SourceError::Network("connection refused".to_string()),
            SourceError::Status(503),
            SourceError::Schema("missing field `products`".to_string()),
        ] {
            let mut store = CatalogStore::new(Currency::USD);
            store.load(&FailingSource(err)).await.unwrap();

            assert!(store.status().is_ready());
            assert!(store.notice().is_some());
            assert!(!store.is_empty());
        }
    }

    #[tokio::test]
    async fn test_second_load_is_rejected() {
        let mut store = CatalogStore::new(Currency::USD);
        let source = StaticSource::new(sample_products());

        store.load(&source).await.unwrap();
        let err = store.load(&source).await.unwrap_err();
        assert!(matches!(err, CommerceError::CatalogAlreadyLoaded));
        // Snapshot untouched by the rejected call.
        assert_eq!(store.len(), 2);
    }
}
