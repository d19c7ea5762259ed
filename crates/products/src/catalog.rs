use std::sync::Arc;

use stockroom_core::DomainResult;

use crate::product::{Product, ProductId};

/// Owned product collection injected into product commands and queries.
pub trait ProductCatalog: Send + Sync {
    /// Append a product. Identifiers are not checked for duplicates.
    fn add(&self, product: Product) -> DomainResult<()>;

    /// Every product, in no guaranteed order.
    fn all(&self) -> DomainResult<Vec<Product>>;

    /// First product stored under `id`, if any.
    fn get(&self, id: ProductId) -> DomainResult<Option<Product>>;
}

impl<C> ProductCatalog for Arc<C>
where
    C: ProductCatalog + ?Sized,
{
    fn add(&self, product: Product) -> DomainResult<()> {
        (**self).add(product)
    }

    fn all(&self) -> DomainResult<Vec<Product>> {
        (**self).all()
    }

    fn get(&self, id: ProductId) -> DomainResult<Option<Product>> {
        (**self).get(id)
    }
}
