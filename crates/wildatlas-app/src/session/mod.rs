//! Session layer
//!
//! Wires auth outcomes to the preference store and decides which top-level
//! screen a frontend should present.

pub mod controller;
pub mod state;

pub use controller::SessionController;
pub use state::{resolve_screen, AuthOp, Screen, SessionCommand, SessionSnapshot};
