//! Authentication errors.

use thiserror::Error;

/// Simulated-authentication error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Email was empty after trimming.
    #[error("email must not be empty")]
    EmptyEmail,

    /// Password was empty after trimming.
    #[error("password must not be empty")]
    EmptyPassword,

    /// A session is already active; log out first.
    #[error("already logged in")]
    AlreadyLoggedIn,
}

impl AuthError {
    /// Check if this is a login-input rejection (the state is unchanged and
    /// the form should be shown again).
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AuthError::EmptyEmail | AuthError::EmptyPassword)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_rejections_are_classified() {
        assert!(AuthError::EmptyEmail.is_invalid_input());
        assert!(AuthError::EmptyPassword.is_invalid_input());
        assert!(!AuthError::AlreadyLoggedIn.is_invalid_input());
    }
}
