//! Products module: the catalog side of the CQRS example.
//!
//! Products are added through [`AddProductCommand`] and read back through
//! [`GetAllProductsQuery`] / [`GetProductByIdQuery`], all against a
//! [`ProductCatalog`] the caller constructs and injects.

pub mod catalog;
pub mod commands;
pub mod product;

pub use catalog::ProductCatalog;
pub use commands::{AddProductCommand, GetAllProductsQuery, GetProductByIdQuery};
pub use product::{Price, Product, ProductId};
