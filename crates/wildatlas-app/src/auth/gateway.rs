//! Identity provider seam
//!
//! Defines the interface an identity provider integration must implement,
//! plus the credential pre-checks applied before any call reaches it.

use crate::config::auth::MIN_PASSWORD_LEN;
use crate::error::{AppError, Result};

use super::state::AuthState;

/// An external identity provider
///
/// Methods block on provider I/O; callers run them off the UI thread and
/// must not touch the preference store until an outcome arrives. Failures
/// carry the provider's human-readable description. Implementations drive
/// the [`AuthState`] from their provider's listener; the gateway itself
/// never touches the preference store.
pub trait AuthGateway: Send + Sync {
    /// Display name for the provider (e.g., "Firebase")
    fn name(&self) -> &'static str;

    /// Observable logged-in state driven by this gateway
    fn state(&self) -> AuthState;

    /// Create an account with email and password
    fn sign_up(&self, email: &str, password: &str) -> Result<()>;

    /// Sign in to an existing account
    fn sign_in(&self, email: &str, password: &str) -> Result<()>;

    /// Sign in without an account
    fn sign_in_anonymously(&self) -> Result<()>;

    /// End the current session
    fn sign_out(&self) -> Result<()>;

    /// Delete the current account
    ///
    /// For anonymous accounts this degrades to a sign-out.
    fn delete_account(&self) -> Result<()>;
}

/// Strip surrounding whitespace before handing an address to the provider
pub fn normalize_email(email: &str) -> &str {
    email.trim()
}

/// Reject obviously unusable credentials before any provider round-trip
pub fn validate_credentials(email: &str, password: &str) -> Result<()> {
    if normalize_email(email).is_empty() || password.is_empty() {
        return Err(AppError::Auth("Enter email and password".to_string()));
    }
    Ok(())
}

/// Additional check applied to sign-up only
pub fn validate_new_password(password: &str) -> Result<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::Auth(
            "Password must be at least 6 characters".to_string(),
        ));
    }
    Ok(())
}
