//! Commerce domain for the Shopfront state engine.
//!
//! This crate owns the storefront's in-memory state and the rules that keep
//! it consistent:
//!
//! - **Catalog**: the product snapshot, loaded once from an external source
//!   with a built-in fallback dataset
//! - **Cart**: a quantity-aggregated ledger priced against the catalog
//! - **Favorites**: a set of marked product identifiers
//! - **Search**: a free-text filter over the catalog plus page state
//!
//! Everything here is single-session and process-lifetime only. There is no
//! persistence and no shared-state locking; stores are plain values mutated
//! through `&mut self`.
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_commerce::prelude::*;
//!
//! let mut catalog = CatalogStore::new(Currency::USD);
//! catalog.load(&source).await?;
//!
//! let mut cart = CartLedger::new();
//! cart.add(ProductId::new("1"));
//! cart.add(ProductId::new("1"));
//!
//! let total = cart.total(catalog.list(), Currency::USD)?;
//! println!("total: {}", total.display());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod ids;
pub mod money;
pub mod search;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        CatalogSource, CatalogStatus, CatalogStore, Product, SourceError, StaticSource,
    };

    // Cart
    pub use crate::cart::{CartEntry, CartLedger};

    // Favorites
    pub use crate::favorites::FavoritesSet;

    // Search
    pub use crate::search::{Pager, SearchFilter, DEFAULT_PAGE_SIZE};
}
