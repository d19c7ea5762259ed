//! In-memory collections backing the domain repositories.
//!
//! These are the owned stores callers construct and inject; there is no
//! process-wide instance.

pub mod inventory;
pub mod products;

pub use inventory::InMemoryInventoryRepository;
pub use products::InMemoryProductCatalog;
