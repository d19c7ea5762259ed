//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new instance.
///
/// - **Value Object**: `Price { minor_units: 120_000 }`
/// - **Entity**: `InventoryItem { id: InventoryItemId(...), .. }`
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Price { minor_units: i64 }
///
/// impl ValueObject for Price {}
///
/// assert_eq!(Price { minor_units: 100 }, Price { minor_units: 100 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
