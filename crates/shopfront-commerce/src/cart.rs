//! Quantity-aggregated cart ledger.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A (product, quantity) pair in the ledger.
///
/// At most one entry per product id exists at any time, and the quantity is
/// always at least 1. Entries do not freeze the price: totals are priced
/// against the catalog snapshot at computation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartEntry {
    /// The product this entry refers to.
    pub product_id: ProductId,
    /// Units in the cart. Always >= 1.
    pub quantity: i64,
}

/// The shopping cart.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartLedger {
    entries: Vec<CartEntry>,
}

impl CartLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// Increments the existing entry or creates one with quantity 1. Always
    /// succeeds; catalog membership is the caller's precondition. Returns
    /// the entry's quantity after the add.
    pub fn add(&mut self, product_id: ProductId) -> i64 {
        if let Some(entry) = self.entry_mut(&product_id) {
            entry.quantity = entry.quantity.saturating_add(1);
            debug!(product = %entry.product_id, quantity = entry.quantity, "cart add");
            return entry.quantity;
        }

        debug!(product = %product_id, quantity = 1, "cart add");
        self.entries.push(CartEntry {
            product_id,
            quantity: 1,
        });
        1
    }

    /// Replace an entry's quantity.
    ///
    /// Quantities below 1 are rejected without touching the entry; removal
    /// is explicit via [`CartLedger::remove`]. A product with no entry is
    /// also a rejected no-op.
    pub fn set_quantity(
        &mut self,
        product_id: &ProductId,
        quantity: i64,
    ) -> Result<(), CommerceError> {
        if quantity < 1 {
            return Err(CommerceError::InvalidQuantity(quantity));
        }

        match self.entry_mut(product_id) {
            Some(entry) => {
                entry.quantity = quantity;
                debug!(product = %product_id, quantity, "cart set quantity");
                Ok(())
            }
            None => Err(CommerceError::ItemNotInCart(product_id.clone())),
        }
    }

    /// Delete an entry. Reports whether anything was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| &e.product_id != product_id);
        let removed = self.entries.len() < len_before;
        if removed {
            debug!(product = %product_id, "cart remove");
        }
        removed
    }

    /// Empty the ledger (after checkout, or on logout).
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The quantity for a product, if it has an entry.
    pub fn quantity_of(&self, product_id: &ProductId) -> Option<i64> {
        self.entries
            .iter()
            .find(|e| &e.product_id == product_id)
            .map(|e| e.quantity)
    }

    /// The entries, in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Whether the cart holds nothing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct products.
    pub fn unique_item_count(&self) -> usize {
        self.entries.len()
    }

    /// Sum of quantities across entries (the header badge count).
    pub fn total_quantity(&self) -> i64 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Price the cart against `catalog` at this moment.
    ///
    /// Each entry contributes `price * quantity` using the product's price
    /// in the given snapshot, not a price remembered at add time. Entries
    /// whose id is absent from the snapshot contribute nothing. Cents
    /// arithmetic is checked; rounding to currency precision happens only
    /// at presentation, via [`Money::display`].
    pub fn total(&self, catalog: &[Product], currency: Currency) -> Result<Money, CommerceError> {
        let mut sum = Money::zero(currency);
        for entry in &self.entries {
            let Some(product) = catalog.iter().find(|p| p.id == entry.product_id) else {
                continue;
            };
            let line = product
                .price
                .try_multiply(entry.quantity)
                .ok_or(CommerceError::Overflow)?;
            sum = sum
                .try_add(&line)
                .ok_or_else(|| CommerceError::CurrencyMismatch {
                    expected: currency.code().to_string(),
                    got: product.price.currency.code().to_string(),
                })?;
        }
        Ok(sum)
    }

    fn entry_mut(&mut self, product_id: &ProductId) -> Option<&mut CartEntry> {
        self.entries.iter_mut().find(|e| &e.product_id == product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {id}"),
            Money::new(price_cents, Currency::USD),
        )
    }

    #[test]
    fn test_add_twice_aggregates_quantity() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("1"));

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.quantity_of(&ProductId::new("1")), Some(2));
    }

    #[test]
    fn test_add_returns_new_quantity() {
        let mut cart = CartLedger::new();
        assert_eq!(cart.add(ProductId::new("1")), 1);
        assert_eq!(cart.add(ProductId::new("1")), 2);
    }

    #[test]
    fn test_set_quantity_below_one_is_rejected() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));

        for bad in [0, -1, -100] {
            let err = cart.set_quantity(&ProductId::new("1"), bad).unwrap_err();
            assert!(matches!(err, CommerceError::InvalidQuantity(_)));
            assert_eq!(cart.quantity_of(&ProductId::new("1")), Some(1));
        }
    }

    #[test]
    fn test_set_quantity_replaces() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.set_quantity(&ProductId::new("1"), 5).unwrap();
        assert_eq!(cart.quantity_of(&ProductId::new("1")), Some(5));
    }

    #[test]
    fn test_set_quantity_absent_is_rejected() {
        let mut cart = CartLedger::new();
        let err = cart.set_quantity(&ProductId::new("9"), 3).unwrap_err();
        assert!(matches!(err, CommerceError::ItemNotInCart(_)));
    }

    #[test]
    fn test_remove_reports_outcome() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));

        assert!(cart.remove(&ProductId::new("1")));
        assert!(!cart.remove(&ProductId::new("1")));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total_scenario() {
        // catalog = [{id: 1, price: 10}], add(1), add(1) -> total == 20
        let catalog = vec![product("1", 1000)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("1"));

        let total = cart.total(&catalog, Currency::USD).unwrap();
        assert_eq!(total.amount_cents, 2000);
    }

    #[test]
    fn test_total_prices_at_computation_time() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));

        let before = vec![product("1", 1000)];
        let after = vec![product("1", 1500)];

        assert_eq!(cart.total(&before, Currency::USD).unwrap().amount_cents, 1000);
        // Same cart, repriced snapshot: the total follows the snapshot.
        assert_eq!(cart.total(&after, Currency::USD).unwrap().amount_cents, 1500);
    }

    #[test]
    fn test_clear_zeroes_total() {
        let catalog = vec![product("1", 1000), product("2", 500)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("2"));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total(&catalog, Currency::USD).unwrap().is_zero());
    }

    #[test]
    fn test_total_skips_ids_missing_from_snapshot() {
        let catalog = vec![product("1", 1000)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("ghost"));

        let total = cart.total(&catalog, Currency::USD).unwrap();
        assert_eq!(total.amount_cents, 1000);
    }

    #[test]
    fn test_total_quantity_counts_units() {
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("1"));
        cart.add(ProductId::new("2"));

        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.unique_item_count(), 2);
    }

    #[test]
    fn test_total_overflow_is_reported() {
        let catalog = vec![product("1", i64::MAX)];
        let mut cart = CartLedger::new();
        cart.add(ProductId::new("1"));
        cart.set_quantity(&ProductId::new("1"), 2).unwrap();

        assert!(matches!(
            cart.total(&catalog, Currency::USD),
            Err(CommerceError::Overflow)
        ));
    }
}
