//! Static reserve catalog
//!
//! Immutable reference data: loaded once, never mutated. Reserve
//! identifiers are stable and are what the preference store records as
//! favorites.

mod details;
mod facts;
mod reserves;
mod source;
pub mod types;

pub use details::detail;
pub use facts::facts;
pub use reserves::{reserve, reserves};
pub use source::{BuiltinCatalog, CatalogSource};
pub use types::{Fact, FactCard, Reserve, ReserveDetail};
