//! Inventory domain module.
//!
//! Stock invariants live on [`InventoryItem`]; [`InventoryService`] orchestrates
//! them through an [`InventoryRepository`], and the command/query types expose
//! the same operations through `stockroom-cqrs` handlers.

pub mod commands;
pub mod item;
pub mod repository;
pub mod service;

pub use commands::{
    AddStockCommand, CreateInventoryItemCommand, GetInventoryItemQuery, ListInventoryItemsQuery,
    RemoveStockCommand,
};
pub use item::{InventoryItem, InventoryItemId};
pub use repository::InventoryRepository;
pub use service::InventoryService;
