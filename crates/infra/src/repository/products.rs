use std::sync::RwLock;

use stockroom_core::{DomainError, DomainResult};
use stockroom_products::{Product, ProductCatalog, ProductId};

/// In-memory product catalog.
#[derive(Debug, Default)]
pub struct InMemoryProductCatalog {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("product catalog lock poisoned")
}

impl ProductCatalog for InMemoryProductCatalog {
    fn add(&self, product: Product) -> DomainResult<()> {
        let mut products = self.products.write().map_err(|_| poisoned())?;
        tracing::trace!(product_id = %product.id_typed(), "adding product");
        products.push(product);
        Ok(())
    }

    fn all(&self) -> DomainResult<Vec<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.clone())
    }

    fn get(&self, id: ProductId) -> DomainResult<Option<Product>> {
        let products = self.products.read().map_err(|_| poisoned())?;
        Ok(products.iter().find(|p| p.id_typed() == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use stockroom_products::Price;

    use super::*;

    #[test]
    fn starts_empty() {
        let catalog = InMemoryProductCatalog::new();
        assert!(catalog.all().unwrap().is_empty());
        assert_eq!(catalog.get(ProductId(1)).unwrap(), None);
    }

    #[test]
    fn keeps_every_added_product() {
        let catalog = InMemoryProductCatalog::new();
        let mouse = Product::new(ProductId(2), "Mouse", Price::from_major_units(25).unwrap());
        let pad = Product::new(ProductId(3), "Pad", Price::ZERO);

        catalog.add(mouse.clone()).unwrap();
        catalog.add(pad.clone()).unwrap();

        assert_eq!(catalog.all().unwrap().len(), 2);
        assert_eq!(catalog.get(ProductId(3)).unwrap(), Some(pad));
    }
}
