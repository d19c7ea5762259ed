//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Errors are raised where an invariant is violated and travel unchanged
/// through every calling layer (entity → service → handler → caller).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A stock removal asked for more than is available (or for a
    /// non-positive amount).
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// No entity is stored under the given identifier.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A conflict occurred (e.g. stale version / optimistic concurrency).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The backing store could not be accessed.
    #[error("storage failure: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn item_not_found(id: impl core::fmt::Display) -> Self {
        Self::ItemNotFound(id.to_string())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
