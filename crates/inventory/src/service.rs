//! Application service for inventory items.
//!
//! Every mutation follows the same unit of work: load a snapshot, let the
//! entity enforce its invariants, then commit through the repository with the
//! version the snapshot was loaded at. A failing entity operation returns
//! before the commit, so nothing is written. Creation commits too: `add`
//! only hands the new item to the repository, `save` makes it durable.

use stockroom_core::{DomainError, DomainResult, ExpectedVersion};

use crate::item::{InventoryItem, InventoryItemId};
use crate::repository::InventoryRepository;

#[derive(Debug, Clone)]
pub struct InventoryService<R> {
    repository: R,
}

impl<R> InventoryService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl<R> InventoryService<R>
where
    R: InventoryRepository,
{
    /// Create and store a new item, returning its generated identifier.
    pub fn create_inventory_item(
        &self,
        name: impl Into<String>,
        quantity: i64,
    ) -> DomainResult<InventoryItemId> {
        self.create_inventory_item_with_id(InventoryItemId::generate(), name, quantity)
    }

    /// Create and store a new item under a caller-chosen identifier.
    pub fn create_inventory_item_with_id(
        &self,
        id: InventoryItemId,
        name: impl Into<String>,
        quantity: i64,
    ) -> DomainResult<InventoryItemId> {
        let item = InventoryItem::with_id(id, name, quantity)?;
        tracing::info!(item_id = %id, name = item.name(), quantity, "creating inventory item");

        let expected = ExpectedVersion::Exact(item.version());
        self.repository.add(item.clone())?;
        self.repository.save(&item, expected)?;
        Ok(id)
    }

    pub fn add_stock(&self, item_id: InventoryItemId, quantity: i64) -> DomainResult<()> {
        self.mutate(item_id, |item| item.add_stock(quantity))?;
        tracing::debug!(item_id = %item_id, quantity, "stock added");
        Ok(())
    }

    pub fn remove_stock(&self, item_id: InventoryItemId, quantity: i64) -> DomainResult<()> {
        self.mutate(item_id, |item| item.remove_stock(quantity))?;
        tracing::debug!(item_id = %item_id, quantity, "stock removed");
        Ok(())
    }

    pub fn get_item(&self, item_id: InventoryItemId) -> DomainResult<InventoryItem> {
        self.repository
            .get_by_id(item_id)?
            .ok_or_else(|| DomainError::item_not_found(item_id))
    }

    pub fn list_items(&self) -> DomainResult<Vec<InventoryItem>> {
        self.repository.list()
    }

    fn mutate(
        &self,
        item_id: InventoryItemId,
        change: impl FnOnce(&mut InventoryItem) -> DomainResult<()>,
    ) -> DomainResult<()> {
        let mut item = self.get_item(item_id)?;
        let expected = ExpectedVersion::Exact(item.version());

        change(&mut item)?;
        self.repository.save(&item, expected)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Minimal repository recording how often `save` is called.
    #[derive(Default)]
    struct RecordingRepository {
        items: Mutex<Vec<InventoryItem>>,
        saves: Mutex<u32>,
    }

    impl RecordingRepository {
        fn saves(&self) -> u32 {
            *self.saves.lock().unwrap()
        }
    }

    impl InventoryRepository for RecordingRepository {
        fn add(&self, item: InventoryItem) -> DomainResult<()> {
            self.items.lock().unwrap().push(item);
            Ok(())
        }

        fn get_by_id(&self, id: InventoryItemId) -> DomainResult<Option<InventoryItem>> {
            let items = self.items.lock().unwrap();
            Ok(items.iter().find(|i| i.id_typed() == id).cloned())
        }

        fn save(&self, item: &InventoryItem, expected: ExpectedVersion) -> DomainResult<()> {
            *self.saves.lock().unwrap() += 1;
            let mut items = self.items.lock().unwrap();
            let slot = items
                .iter_mut()
                .find(|i| i.id_typed() == item.id_typed())
                .ok_or_else(|| DomainError::item_not_found(item.id_typed()))?;
            expected.check(slot.version())?;
            *slot = item.clone();
            Ok(())
        }

        fn list(&self) -> DomainResult<Vec<InventoryItem>> {
            Ok(self.items.lock().unwrap().clone())
        }
    }

    /// Repository that stages `add` until the item is committed by `save`.
    #[derive(Default)]
    struct StagingRepository {
        staged: Mutex<Vec<InventoryItem>>,
        committed: Mutex<Vec<InventoryItem>>,
    }

    impl InventoryRepository for StagingRepository {
        fn add(&self, item: InventoryItem) -> DomainResult<()> {
            self.staged.lock().unwrap().push(item);
            Ok(())
        }

        fn get_by_id(&self, id: InventoryItemId) -> DomainResult<Option<InventoryItem>> {
            let committed = self.committed.lock().unwrap();
            Ok(committed.iter().find(|i| i.id_typed() == id).cloned())
        }

        fn save(&self, item: &InventoryItem, expected: ExpectedVersion) -> DomainResult<()> {
            let mut committed = self.committed.lock().unwrap();
            if let Some(slot) = committed.iter_mut().find(|i| i.id_typed() == item.id_typed()) {
                expected.check(slot.version())?;
                *slot = item.clone();
                return Ok(());
            }

            let mut staged = self.staged.lock().unwrap();
            let pos = staged
                .iter()
                .position(|i| i.id_typed() == item.id_typed())
                .ok_or_else(|| DomainError::item_not_found(item.id_typed()))?;
            expected.check(staged[pos].version())?;
            staged.remove(pos);
            committed.push(item.clone());
            Ok(())
        }

        fn list(&self) -> DomainResult<Vec<InventoryItem>> {
            Ok(self.committed.lock().unwrap().clone())
        }
    }

    fn service() -> (InventoryService<Arc<RecordingRepository>>, Arc<RecordingRepository>) {
        let repo = Arc::new(RecordingRepository::default());
        (InventoryService::new(repo.clone()), repo)
    }

    #[test]
    fn create_then_add_stock() {
        let (svc, repo) = service();
        let id = svc.create_inventory_item("Widget", 10).unwrap();

        assert_eq!(repo.saves(), 1);

        svc.add_stock(id, 5).unwrap();

        assert_eq!(svc.get_item(id).unwrap().quantity(), 15);
        assert_eq!(repo.saves(), 2);
    }

    #[test]
    fn create_commits_through_save() {
        let (svc, repo) = service();
        svc.create_inventory_item("Widget", 10).unwrap();
        assert_eq!(repo.saves(), 1);
    }

    #[test]
    fn created_item_is_visible_in_a_staging_repository() {
        let svc = InventoryService::new(StagingRepository::default());
        let id = svc.create_inventory_item("Widget", 10).unwrap();

        svc.add_stock(id, 5).unwrap();

        assert_eq!(svc.get_item(id).unwrap().quantity(), 15);
        assert_eq!(svc.list_items().unwrap().len(), 1);
    }

    #[test]
    fn create_with_explicit_id_keeps_it() {
        let (svc, _repo) = service();
        let id = InventoryItemId::generate();

        assert_eq!(svc.create_inventory_item_with_id(id, "Gadget", 1).unwrap(), id);
        assert_eq!(svc.get_item(id).unwrap().name(), "Gadget");
    }

    #[test]
    fn create_with_negative_quantity_stores_nothing() {
        let (svc, repo) = service();
        let err = svc.create_inventory_item("Widget", -5).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(svc.list_items().unwrap().is_empty());
        assert_eq!(repo.saves(), 0);
    }

    #[test]
    fn remove_too_much_fails_and_skips_save() {
        let (svc, repo) = service();
        let id = svc.create_inventory_item("Widget", 10).unwrap();

        let err = svc.remove_stock(id, 15).unwrap_err();

        assert_eq!(err, DomainError::insufficient_stock(15, 10));
        assert_eq!(svc.get_item(id).unwrap().quantity(), 10);
        assert_eq!(repo.saves(), 1);
    }

    #[test]
    fn unknown_item_is_not_found_and_nothing_changes() {
        let (svc, repo) = service();
        let existing = svc.create_inventory_item("Widget", 10).unwrap();
        let missing = InventoryItemId::generate();

        assert!(matches!(svc.add_stock(missing, 5), Err(DomainError::ItemNotFound(_))));
        assert!(matches!(svc.remove_stock(missing, 5), Err(DomainError::ItemNotFound(_))));
        assert!(matches!(svc.get_item(missing), Err(DomainError::ItemNotFound(_))));

        assert_eq!(svc.get_item(existing).unwrap().quantity(), 10);
        assert_eq!(repo.saves(), 1);
    }
}
