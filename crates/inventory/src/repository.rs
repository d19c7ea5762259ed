use std::sync::Arc;

use stockroom_core::{DomainResult, ExpectedVersion};

use crate::item::{InventoryItem, InventoryItemId};

/// Collection gateway for inventory items.
///
/// Implementations hand out owned snapshots; changes made to a snapshot only
/// become visible to other callers once they are committed with [`save`].
///
/// [`save`]: InventoryRepository::save
pub trait InventoryRepository: Send + Sync {
    /// Insert an item. No duplicate-identifier check is performed.
    fn add(&self, item: InventoryItem) -> DomainResult<()>;

    /// Look an item up by identifier (`Ok(None)` when absent).
    fn get_by_id(&self, id: InventoryItemId) -> DomainResult<Option<InventoryItem>>;

    /// Commit a mutated item.
    ///
    /// Fails with `ItemNotFound` when nothing is stored under the item's id,
    /// and with `Conflict` when the stored version does not satisfy `expected`.
    fn save(&self, item: &InventoryItem, expected: ExpectedVersion) -> DomainResult<()>;

    /// All stored items. Order is not part of the contract.
    fn list(&self) -> DomainResult<Vec<InventoryItem>>;
}

impl<R> InventoryRepository for Arc<R>
where
    R: InventoryRepository + ?Sized,
{
    fn add(&self, item: InventoryItem) -> DomainResult<()> {
        (**self).add(item)
    }

    fn get_by_id(&self, id: InventoryItemId) -> DomainResult<Option<InventoryItem>> {
        (**self).get_by_id(id)
    }

    fn save(&self, item: &InventoryItem, expected: ExpectedVersion) -> DomainResult<()> {
        (**self).save(item, expected)
    }

    fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        (**self).list()
    }
}
