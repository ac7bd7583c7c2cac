//! Engine error type.

use shopfront_auth::AuthError;
use shopfront_commerce::CommerceError;
use thiserror::Error;

/// Errors surfaced by the storefront facade.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Checkout was attempted while logged out. No cart mutation occurred;
    /// the presentation layer should open its login prompt.
    #[error("login required")]
    LoginRequired,

    /// Commerce-store error.
    #[error("commerce error: {0}")]
    Commerce(#[from] CommerceError),

    /// Session error.
    #[error("auth error: {0}")]
    Auth(#[from] AuthError),
}

impl EngineError {
    /// Whether this outcome asks the presentation layer for a login prompt.
    pub fn needs_login(&self) -> bool {
        matches!(self, EngineError::LoginRequired)
    }
}
