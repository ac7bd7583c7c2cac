//! Simulated session management for the Shopfront state engine.
//!
//! One session, two states: logged out or logged in. Login only checks
//! that credentials are present; see [`session`] for the boundary this
//! deliberately is not.

pub mod error;
pub mod session;

pub use error::AuthError;
pub use session::{Session, SessionManager, SessionState};
