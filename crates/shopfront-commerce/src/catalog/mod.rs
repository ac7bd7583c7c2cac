//! Product catalog module.
//!
//! Contains the product record, the external-source seam, and the store
//! that owns the session's catalog snapshot.

mod fallback;
mod product;
mod source;
mod store;

pub use fallback::fallback_products;
pub use product::Product;
pub use source::{decode_payload, CatalogSource, SourceError, StaticSource};
pub use store::{CatalogStatus, CatalogStore};
