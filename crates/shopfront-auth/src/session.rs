//! Simulated session state.
//!
//! Login here checks only that both fields are present after trimming. The
//! password is never verified against anything: this gate exists so the
//! storefront can demo a logged-in flow, and it is NOT a security boundary.
//! Do not wire real authorization decisions through it.

use crate::error::AuthError;
use serde::{Deserialize, Serialize};
use tracing::info;

/// The simulated logged-in identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    /// Name shown in the header and on receipts: the local part of the
    /// email (everything before the first `@`).
    pub display_name: String,
    /// The email as entered, trimmed.
    pub email: String,
}

/// The two states of the session machine.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum SessionState {
    /// No active session. Initial state.
    #[default]
    LoggedOut,
    /// An active session.
    LoggedIn(Session),
}

/// Owns the session state; mutated only by login and logout.
#[derive(Debug, Clone, Default)]
pub struct SessionManager {
    state: SessionState,
}

impl SessionManager {
    /// Create a manager in the logged-out state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attempt a login.
    ///
    /// Both fields must be non-empty after trimming; otherwise the attempt
    /// is rejected and the state stays logged out. Logging in over an
    /// active session is rejected; there is no LoggedIn -> LoggedIn
    /// transition without an intervening logout. The password's content is
    /// intentionally ignored beyond the presence check (simulated
    /// authentication).
    pub fn login(&mut self, email: &str, password: &str) -> Result<Session, AuthError> {
        if self.is_logged_in() {
            return Err(AuthError::AlreadyLoggedIn);
        }

        let email = email.trim();
        let password = password.trim();
        if email.is_empty() {
            return Err(AuthError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(AuthError::EmptyPassword);
        }

        let display_name = email.split('@').next().unwrap_or(email).to_string();
        let session = Session {
            display_name,
            email: email.to_string(),
        };

        info!(user = %session.display_name, "login");
        self.state = SessionState::LoggedIn(session.clone());
        Ok(session)
    }

    /// End the session unconditionally.
    ///
    /// Safe to call repeatedly; reports whether a session actually ended.
    /// Forfeiting the cart on logout is the composition layer's job.
    pub fn logout(&mut self) -> bool {
        let ended = self.is_logged_in();
        if ended {
            info!("logout");
        }
        self.state = SessionState::LoggedOut;
        ended
    }

    /// The active session, if any.
    pub fn current(&self) -> Option<&Session> {
        match &self.state {
            SessionState::LoggedIn(session) => Some(session),
            SessionState::LoggedOut => None,
        }
    }

    /// Whether a session is active.
    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// The raw state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }
}
