//! Authentication gateway
//!
//! The identity provider is an external collaborator; this module defines
//! the seam it is consumed through plus the observable logged-in state.

pub mod gateway;
pub mod state;

pub use gateway::{normalize_email, validate_credentials, validate_new_password, AuthGateway};
pub use state::AuthState;
