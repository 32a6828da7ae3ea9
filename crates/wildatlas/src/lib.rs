//! Wildatlas core
//!
//! The static nature-reserve catalog: ten fixed reserve records with
//! pre-written details and facts, plus the `CatalogSource` seam that
//! frontends consume the data through.

pub mod catalog;

pub use catalog::{BuiltinCatalog, CatalogSource};
