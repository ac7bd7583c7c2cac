//! Storefront state engine.
//!
//! Composes the independent Shopfront stores (catalog, search, pager,
//! cart, favorites, session) into a single [`Storefront`] facade exposing
//! the intents a presentation layer invokes, and owns the cross-store
//! wiring the stores themselves deliberately do not know about (logout
//! forfeits the cart, a query change resets the page, checkout clears the
//! cart behind a receipt).
//!
//! # Example
//!
//! ```rust,ignore
//! use shopfront_engine::{Storefront, StorefrontConfig};
//!
//! let mut shop = Storefront::new(StorefrontConfig::new("Shopfront"));
//! shop.load_catalog(&source).await?;
//!
//! shop.set_query("headphones");
//! for product in shop.visible_page() {
//!     println!("{} {}", product.title, product.price_display());
//! }
//! ```

pub mod checkout;
pub mod config;
pub mod error;
pub mod storefront;

pub use checkout::Receipt;
pub use config::StorefrontConfig;
pub use error::EngineError;
pub use storefront::Storefront;
