//! In-memory storage for the catalog.
//!
//! ## Components
//!
//! - [`Collection`]: ordered, append-only sequence of records with id assignment
//! - [`Catalog`]: the three collections and the lookups the schema needs
//! - [`SharedCatalog`]: a catalog shared between concurrent requests

mod catalog;
mod collection;
mod seed;

pub use catalog::{Catalog, SharedCatalog};
pub use collection::Collection;
