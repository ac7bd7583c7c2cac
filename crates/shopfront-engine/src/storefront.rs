//! The storefront facade.
//!
//! One instance of each store, composed behind the intents a presentation
//! layer calls. The derived view is a pure pipeline, (catalog, query,
//! page) -> visible items, recomputed on every read rather than cached;
//! at this data scale staleness bugs cost more than recomputation.

use crate::checkout::{self, Receipt};
use crate::config::StorefrontConfig;
use crate::error::EngineError;
use shopfront_auth::{Session, SessionManager};
use shopfront_commerce::cart::CartLedger;
use shopfront_commerce::catalog::{CatalogSource, CatalogStatus, CatalogStore, Product};
use shopfront_commerce::favorites::FavoritesSet;
use shopfront_commerce::search::{Pager, SearchFilter};
use shopfront_commerce::{CommerceError, Money, ProductId};

/// The client-side state engine behind the storefront.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    catalog: CatalogStore,
    filter: SearchFilter,
    pager: Pager,
    cart: CartLedger,
    favorites: FavoritesSet,
    session: SessionManager,
}

impl Storefront {
    /// Create an engine with an unloaded catalog and everything else empty.
    pub fn new(config: StorefrontConfig) -> Self {
        Self {
            catalog: CatalogStore::new(config.currency),
            filter: SearchFilter::new(),
            pager: Pager::new(config.page_size),
            cart: CartLedger::new(),
            favorites: FavoritesSet::new(),
            session: SessionManager::new(),
            config,
        }
    }

    // ------------------------------------------------------------------
    // Catalog
    // ------------------------------------------------------------------

    /// Run the one-time catalog load and size the pager for the result.
    ///
    /// The presentation layer stays in its loading state until this
    /// resolves; afterwards the store holds either live or fallback data
    /// (check [`Storefront::catalog_notice`] for the latter).
    pub async fn load_catalog(
        &mut self,
        source: &dyn CatalogSource,
    ) -> Result<&CatalogStatus, EngineError> {
        self.catalog.load(source).await?;
        let count = self.filter.apply(self.catalog.list()).len();
        self.pager.retotal(count);
        Ok(self.catalog.status())
    }

    /// The catalog store.
    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    /// The source-failure notice to surface, if the catalog fell back.
    pub fn catalog_notice(&self) -> Option<&str> {
        self.catalog.notice()
    }

    // ------------------------------------------------------------------
    // Search and pages
    // ------------------------------------------------------------------

    /// Replace the search query and go back to page 1.
    ///
    /// Every query change resets the page, even when the filtered length
    /// does not change; cart and session changes never touch the page.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.set(query);
        let count = self.filter.apply(self.catalog.list()).len();
        self.pager.reset(count);
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        self.filter.query()
    }

    /// The filtered catalog, in catalog order.
    pub fn filtered(&self) -> Vec<&Product> {
        self.filter.apply(self.catalog.list())
    }

    /// Number of products matching the current query.
    pub fn result_count(&self) -> usize {
        self.filtered().len()
    }

    /// The products on the current page of the filtered catalog.
    pub fn visible_page(&self) -> Vec<&Product> {
        let filtered = self.filtered();
        self.pager.slice(&filtered).to_vec()
    }

    /// Turn to a page of the filtered catalog.
    ///
    /// Out-of-range requests are rejected with no state change; a
    /// successful return doubles as the scroll-reset signal.
    pub fn paginate(&mut self, page: usize) -> Result<usize, EngineError> {
        Ok(self.pager.go_to(page)?)
    }

    /// The page state.
    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    // ------------------------------------------------------------------
    // Cart
    // ------------------------------------------------------------------

    /// Add one unit of a catalog product to the cart.
    ///
    /// The id must be in the current snapshot; the ledger itself then
    /// always succeeds. Returns the entry's quantity after the add.
    pub fn add_to_cart(&mut self, product_id: &ProductId) -> Result<i64, EngineError> {
        if !self.catalog.contains(product_id) {
            return Err(CommerceError::ProductNotFound(product_id.clone()).into());
        }
        Ok(self.cart.add(product_id.clone()))
    }

    /// Replace a cart entry's quantity (rejected below 1).
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<(), EngineError> {
        Ok(self.cart.set_quantity(product_id, quantity)?)
    }

    /// Remove a cart entry; reports whether anything was removed.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        self.cart.remove(product_id)
    }

    /// Price the cart against the current snapshot.
    pub fn cart_total(&self) -> Result<Money, EngineError> {
        Ok(self.cart.total(self.catalog.list(), self.config.currency)?)
    }

    /// The cart ledger.
    pub fn cart(&self) -> &CartLedger {
        &self.cart
    }

    // ------------------------------------------------------------------
    // Favorites
    // ------------------------------------------------------------------

    /// Toggle a catalog product's favorite mark.
    ///
    /// Returns whether the product is marked afterwards. Unknown ids are
    /// rejected, which keeps the set within products that existed in a
    /// loaded snapshot; existing marks are never purged.
    pub fn toggle_favorite(&mut self, product_id: &ProductId) -> Result<bool, EngineError> {
        if !self.catalog.contains(product_id) {
            return Err(CommerceError::ProductNotFound(product_id.clone()).into());
        }
        Ok(self.favorites.toggle(product_id.clone()))
    }

    /// The favorites set.
    pub fn favorites(&self) -> &FavoritesSet {
        &self.favorites
    }

    // ------------------------------------------------------------------
    // Session and checkout
    // ------------------------------------------------------------------

    /// Attempt a (simulated) login.
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, EngineError> {
        Ok(self.session.login(email, password)?)
    }

    /// End the session and forfeit the cart.
    ///
    /// The cart is cleared even when no session was active. Reports whether
    /// a session ended.
    pub fn logout(&mut self) -> bool {
        let ended = self.session.logout();
        self.cart.clear();
        ended
    }

    /// The session manager.
    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Finalize the order, or reject it with a login-required signal.
    pub fn checkout(&mut self) -> Result<Receipt, EngineError> {
        checkout::process(
            &self.session,
            &mut self.cart,
            self.catalog.list(),
            self.config.currency,
        )
    }

    /// The engine configuration.
    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new(StorefrontConfig::default())
    }
}
