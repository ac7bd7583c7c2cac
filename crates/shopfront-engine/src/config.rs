//! Engine configuration.

use shopfront_commerce::money::Currency;
use shopfront_commerce::search::DEFAULT_PAGE_SIZE;

/// Configuration for a [`crate::Storefront`].
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Store display name.
    pub name: String,
    /// Fixed page size for catalog browsing. Set once; never changes while
    /// the engine runs.
    pub page_size: usize,
    /// Currency for catalog prices and cart totals.
    pub currency: Currency,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Shopfront".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            currency: Currency::USD,
        }
    }
}

impl StorefrontConfig {
    /// Create a configuration with the given store name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}
