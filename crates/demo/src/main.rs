use std::sync::Arc;

use anyhow::Context;

use stockroom_core::DomainError;
use stockroom_cqrs::{CommandHandler, QueryHandler};
use stockroom_infra::{InMemoryInventoryRepository, InMemoryProductCatalog};
use stockroom_inventory::InventoryService;
use stockroom_products::{AddProductCommand, GetAllProductsQuery, Price, Product, ProductId};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    run_catalog()?;
    run_inventory()?;
    Ok(())
}

fn run_catalog() -> anyhow::Result<()> {
    let catalog = InMemoryProductCatalog::new();
    let commands = CommandHandler::new();
    let queries = QueryHandler::new();

    let laptop = Product::new(ProductId(1), "Laptop", Price::from_major_units(1200)?);
    commands
        .handle(&AddProductCommand::new(&catalog, laptop))
        .context("adding product")?;

    let products = queries.handle(&GetAllProductsQuery::new(&catalog))?;
    for product in &products {
        println!("Product: {}, Price: {}", product.name(), product.price());
    }

    println!("{}", serde_json::to_string_pretty(&products)?);
    Ok(())
}

fn run_inventory() -> anyhow::Result<()> {
    let service = InventoryService::new(Arc::new(InMemoryInventoryRepository::new()));

    let id = service.create_inventory_item("Widget", 10)?;
    service.add_stock(id, 5)?;
    println!("Widget stock after restock: {}", service.get_item(id)?.quantity());

    match service.remove_stock(id, 50) {
        Err(DomainError::InsufficientStock {
            requested,
            available,
        }) => {
            tracing::warn!(requested, available, "removal rejected");
            println!("Cannot remove {requested}: only {available} in stock");
        }
        other => other.context("removing stock")?,
    }

    service.remove_stock(id, 15)?;
    println!("Widget stock after shipment: {}", service.get_item(id)?.quantity());
    Ok(())
}
