use std::sync::RwLock;

use stockroom_core::{DomainError, DomainResult, ExpectedVersion};
use stockroom_inventory::{InventoryItem, InventoryItemId, InventoryRepository};

/// In-memory inventory repository.
///
/// Items live in an insertion-ordered `Vec` behind an `RwLock`; lookups are
/// linear. Intended for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInventoryRepository {
    items: RwLock<Vec<InventoryItem>>,
}

impl InMemoryInventoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> DomainResult<usize> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.len())
    }

    pub fn is_empty(&self) -> DomainResult<bool> {
        Ok(self.len()? == 0)
    }
}

fn poisoned() -> DomainError {
    DomainError::storage("inventory lock poisoned")
}

impl InventoryRepository for InMemoryInventoryRepository {
    fn add(&self, item: InventoryItem) -> DomainResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.push(item);
        Ok(())
    }

    fn get_by_id(&self, id: InventoryItemId) -> DomainResult<Option<InventoryItem>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.iter().find(|item| item.id_typed() == id).cloned())
    }

    fn save(&self, item: &InventoryItem, expected: ExpectedVersion) -> DomainResult<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;

        let stored = items
            .iter_mut()
            .find(|stored| stored.id_typed() == item.id_typed())
            .ok_or_else(|| DomainError::item_not_found(item.id_typed()))?;

        expected.check(stored.version())?;

        tracing::trace!(
            item_id = %item.id_typed(),
            from_version = stored.version(),
            to_version = item.version(),
            "committing inventory item"
        );
        *stored = item.clone();
        Ok(())
    }

    fn list(&self) -> DomainResult<Vec<InventoryItem>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.clone())
    }
}
