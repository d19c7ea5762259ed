//! Inventory operations expressed as commands and queries.
//!
//! Each type borrows the [`InventoryService`] it delegates to, so the same
//! service (and the repository behind it) serves every dispatch.

use stockroom_core::{DomainError, DomainResult};
use stockroom_cqrs::{Command, Query};

use crate::item::{InventoryItem, InventoryItemId};
use crate::repository::InventoryRepository;
use crate::service::InventoryService;

/// Command: create an item under a caller-chosen id.
#[derive(Debug)]
pub struct CreateInventoryItemCommand<'a, R> {
    service: &'a InventoryService<R>,
    pub item_id: InventoryItemId,
    pub name: String,
    pub quantity: i64,
}

impl<'a, R> CreateInventoryItemCommand<'a, R> {
    pub fn new(
        service: &'a InventoryService<R>,
        item_id: InventoryItemId,
        name: impl Into<String>,
        quantity: i64,
    ) -> Self {
        Self {
            service,
            item_id,
            name: name.into(),
            quantity,
        }
    }
}

impl<R: InventoryRepository> Command for CreateInventoryItemCommand<'_, R> {
    type Error = DomainError;

    fn execute(&self) -> DomainResult<()> {
        self.service
            .create_inventory_item_with_id(self.item_id, self.name.clone(), self.quantity)
            .map(|_| ())
    }

    fn name(&self) -> &'static str {
        "inventory.create_item"
    }
}

/// Command: add stock to an existing item.
#[derive(Debug)]
pub struct AddStockCommand<'a, R> {
    service: &'a InventoryService<R>,
    pub item_id: InventoryItemId,
    pub quantity: i64,
}

impl<'a, R> AddStockCommand<'a, R> {
    pub fn new(service: &'a InventoryService<R>, item_id: InventoryItemId, quantity: i64) -> Self {
        Self {
            service,
            item_id,
            quantity,
        }
    }
}

impl<R: InventoryRepository> Command for AddStockCommand<'_, R> {
    type Error = DomainError;

    fn execute(&self) -> DomainResult<()> {
        self.service.add_stock(self.item_id, self.quantity)
    }

    fn name(&self) -> &'static str {
        "inventory.add_stock"
    }
}

/// Command: remove stock from an existing item.
#[derive(Debug)]
pub struct RemoveStockCommand<'a, R> {
    service: &'a InventoryService<R>,
    pub item_id: InventoryItemId,
    pub quantity: i64,
}

impl<'a, R> RemoveStockCommand<'a, R> {
    pub fn new(service: &'a InventoryService<R>, item_id: InventoryItemId, quantity: i64) -> Self {
        Self {
            service,
            item_id,
            quantity,
        }
    }
}

impl<R: InventoryRepository> Command for RemoveStockCommand<'_, R> {
    type Error = DomainError;

    fn execute(&self) -> DomainResult<()> {
        self.service.remove_stock(self.item_id, self.quantity)
    }

    fn name(&self) -> &'static str {
        "inventory.remove_stock"
    }
}

/// Query: one item by id (`ItemNotFound` when absent).
#[derive(Debug)]
pub struct GetInventoryItemQuery<'a, R> {
    service: &'a InventoryService<R>,
    pub item_id: InventoryItemId,
}

impl<'a, R> GetInventoryItemQuery<'a, R> {
    pub fn new(service: &'a InventoryService<R>, item_id: InventoryItemId) -> Self {
        Self { service, item_id }
    }
}

impl<R: InventoryRepository> Query for GetInventoryItemQuery<'_, R> {
    type Output = InventoryItem;
    type Error = DomainError;

    fn execute(&self) -> DomainResult<InventoryItem> {
        self.service.get_item(self.item_id)
    }

    fn name(&self) -> &'static str {
        "inventory.get_item"
    }
}

/// Query: every stored item.
#[derive(Debug)]
pub struct ListInventoryItemsQuery<'a, R> {
    service: &'a InventoryService<R>,
}

impl<'a, R> ListInventoryItemsQuery<'a, R> {
    pub fn new(service: &'a InventoryService<R>) -> Self {
        Self { service }
    }
}

impl<R: InventoryRepository> Query for ListInventoryItemsQuery<'_, R> {
    type Output = Vec<InventoryItem>;
    type Error = DomainError;

    fn execute(&self) -> DomainResult<Vec<InventoryItem>> {
        self.service.list_items()
    }

    fn name(&self) -> &'static str {
        "inventory.list_items"
    }
}
