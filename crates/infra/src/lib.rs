//! Infrastructure layer: concrete stores behind the domain repositories.

pub mod repository;


pub use repository::{InMemoryInventoryRepository, InMemoryProductCatalog};
