//! Local checkout simulation.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use shopfront_auth::SessionManager;
use shopfront_commerce::cart::CartLedger;
use shopfront_commerce::catalog::Product;
use shopfront_commerce::money::{Currency, Money};
use shopfront_commerce::OrderId;
use tracing::info;

/// Terminal record of a simulated order placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Receipt {
    /// Locally minted order identifier.
    pub order_id: OrderId,
    /// The session's display name at checkout time.
    pub customer_name: String,
    /// The charged total.
    pub total: Money,
}

impl Receipt {
    /// Confirmation line for the presentation layer.
    pub fn summary(&self) -> String {
        format!(
            "Thank you, {}! Your order of {} was successful.",
            self.customer_name,
            self.total.display()
        )
    }
}

/// Finalize or reject an order from the current session and cart.
///
/// Logged out: rejected with [`EngineError::LoginRequired`] and no cart
/// mutation. Logged in: the cart is priced against the snapshot, emptied,
/// and the receipt returned; an empty cart checks out at zero. Nothing
/// here talks to a payment or order system; this is a terminal, local
/// simulation.
pub fn process(
    session: &SessionManager,
    cart: &mut CartLedger,
    catalog: &[Product],
    currency: Currency,
) -> Result<Receipt, EngineError> {
    let Some(active) = session.current() else {
        return Err(EngineError::LoginRequired);
    };

    let total = cart.total(catalog, currency)?;
    cart.clear();

    let receipt = Receipt {
        order_id: OrderId::generate(),
        customer_name: active.display_name.clone(),
        total,
    };
    info!(order = %receipt.order_id, total = %receipt.total, "checkout complete");
    Ok(receipt)
}
