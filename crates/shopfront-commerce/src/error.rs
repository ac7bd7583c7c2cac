//! Commerce error types.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront state operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Catalog was already loaded; the store never refetches.
    #[error("catalog already loaded")]
    CatalogAlreadyLoaded,

    /// Product not in the current catalog snapshot.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// Cart operation on a product with no entry.
    #[error("item not in cart: {0}")]
    ItemNotInCart(ProductId),

    /// Quantity below the minimum of 1.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Requested page outside the valid range.
    #[error("page {requested} out of range (1..={pages})")]
    PageOutOfRange { requested: usize, pages: usize },

    /// Arithmetic overflow in money calculation.
    #[error("arithmetic overflow in money calculation")]
    Overflow,

    /// Currency mismatch.
    #[error("currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },
}

impl CommerceError {
    /// Check whether this is a rejected no-op: the operation changed nothing
    /// and the presentation layer may ignore or display it.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            CommerceError::CatalogAlreadyLoaded
                | CommerceError::ProductNotFound(_)
                | CommerceError::ItemNotInCart(_)
                | CommerceError::InvalidQuantity(_)
                | CommerceError::PageOutOfRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejections_are_classified() {
        assert!(CommerceError::InvalidQuantity(0).is_rejection());
        assert!(CommerceError::PageOutOfRange {
            requested: 9,
            pages: 2
        }
        .is_rejection());
        assert!(!CommerceError::Overflow.is_rejection());
    }

    #[test]
    fn test_error_messages() {
        let err = CommerceError::ProductNotFound(ProductId::new("41"));
        assert_eq!(err.to_string(), "product not found: 41");
    }
}
