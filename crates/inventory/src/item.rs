use serde::{Deserialize, Serialize};

use stockroom_core::{AggregateId, DomainError, DomainResult, Entity};

/// Inventory item identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InventoryItemId(pub AggregateId);

impl InventoryItemId {
    pub fn generate() -> Self {
        Self(AggregateId::new())
    }
}

impl core::fmt::Display for InventoryItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for InventoryItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Entity: InventoryItem.
///
/// Identity and name are fixed at creation. The stock level only changes
/// through [`add_stock`](Self::add_stock) and [`remove_stock`](Self::remove_stock),
/// which keep `quantity >= 0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    id: InventoryItemId,
    name: String,
    quantity: i64,
    version: u64,
}

impl InventoryItem {
    /// Create a new item with a generated identifier.
    pub fn new(name: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        Self::with_id(InventoryItemId::generate(), name, quantity)
    }

    /// Create a new item with a caller-chosen identifier.
    pub fn with_id(id: InventoryItemId, name: impl Into<String>, quantity: i64) -> DomainResult<Self> {
        if quantity < 0 {
            return Err(DomainError::validation("initial quantity cannot be negative"));
        }
        Ok(Self {
            id,
            name: name.into(),
            quantity,
            version: 0,
        })
    }

    pub fn id_typed(&self) -> InventoryItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Number of effective stock mutations applied since creation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Add stock. Non-positive amounts are ignored.
    pub fn add_stock(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 {
            return Ok(());
        }
        let new_quantity = self
            .quantity
            .checked_add(quantity)
            .ok_or_else(|| DomainError::validation("stock quantity overflow"))?;

        self.quantity = new_quantity;
        self.version += 1;
        Ok(())
    }

    /// Remove stock.
    ///
    /// Fails with `InsufficientStock` unless `0 < quantity <= self.quantity()`;
    /// on failure the item is left untouched.
    pub fn remove_stock(&mut self, quantity: i64) -> DomainResult<()> {
        if quantity <= 0 || quantity > self.quantity {
            return Err(DomainError::insufficient_stock(quantity, self.quantity));
        }
        self.quantity -= quantity;
        self.version += 1;
        Ok(())
    }
}

impl Entity for InventoryItem {
    type Id = InventoryItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
