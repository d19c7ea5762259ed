use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, DomainResult, Entity, ValueObject};

/// Product identifier (caller-assigned integer).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Monetary amount in the smallest currency unit (e.g. cents).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct Price {
    minor_units: i64,
}

impl Price {
    pub const ZERO: Price = Price { minor_units: 0 };

    pub fn from_minor_units(minor_units: i64) -> DomainResult<Self> {
        if minor_units < 0 {
            return Err(DomainError::validation("price cannot be negative"));
        }
        Ok(Self { minor_units })
    }

    /// Whole currency units, e.g. `from_major_units(1200)` is 1200.00.
    pub fn from_major_units(major_units: i64) -> DomainResult<Self> {
        let minor_units = major_units
            .checked_mul(100)
            .ok_or_else(|| DomainError::validation("price overflow"))?;
        Self::from_minor_units(minor_units)
    }

    pub fn minor_units(&self) -> i64 {
        self.minor_units
    }
}

impl ValueObject for Price {}

impl TryFrom<i64> for Price {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_minor_units(value)
    }
}

impl From<Price> for i64 {
    fn from(value: Price) -> Self {
        value.minor_units
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.minor_units / 100, self.minor_units % 100)
    }
}

/// Entity: Product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
}

impl Product {
    pub fn new(id: ProductId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
