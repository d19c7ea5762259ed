use stockroom_core::{DomainError, DomainResult};
use stockroom_cqrs::{Command, Query};

use crate::catalog::ProductCatalog;
use crate::product::{Product, ProductId};

/// Command: add one product to the catalog.
pub struct AddProductCommand<'a> {
    catalog: &'a dyn ProductCatalog,
    product: Product,
}

impl<'a> AddProductCommand<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog, product: Product) -> Self {
        Self { catalog, product }
    }
}

impl Command for AddProductCommand<'_> {
    type Error = DomainError;

    fn execute(&self) -> DomainResult<()> {
        self.catalog.add(self.product.clone())
    }

    fn name(&self) -> &'static str {
        "products.add_product"
    }
}

/// Query: list every product.
pub struct GetAllProductsQuery<'a> {
    catalog: &'a dyn ProductCatalog,
}

impl<'a> GetAllProductsQuery<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog) -> Self {
        Self { catalog }
    }
}

impl Query for GetAllProductsQuery<'_> {
    type Output = Vec<Product>;
    type Error = DomainError;

    fn execute(&self) -> DomainResult<Vec<Product>> {
        self.catalog.all()
    }

    fn name(&self) -> &'static str {
        "products.get_all"
    }
}

/// Query: one product by id (`None` when absent).
pub struct GetProductByIdQuery<'a> {
    catalog: &'a dyn ProductCatalog,
    id: ProductId,
}

impl<'a> GetProductByIdQuery<'a> {
    pub fn new(catalog: &'a dyn ProductCatalog, id: ProductId) -> Self {
        Self { catalog, id }
    }
}

impl Query for GetProductByIdQuery<'_> {
    type Output = Option<Product>;
    type Error = DomainError;

    fn execute(&self) -> DomainResult<Option<Product>> {
        self.catalog.get(self.id)
    }

    fn name(&self) -> &'static str {
        "products.get_by_id"
    }
}
