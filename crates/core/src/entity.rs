//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier are the same entity, even when the
/// rest of their state differs (e.g. a stock level read before and after a
/// mutation).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns `true` when `other` carries the same identity.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
