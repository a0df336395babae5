//! Inventory error model.

use thiserror::Error;

use crate::item::{ItemId, Quantity};

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Store-level failure.
///
/// Each kind is its own variant and carries the identifier or value involved,
/// so callers can match on it instead of parsing messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An item with this identifier is already stored.
    #[error("item with id {0} already exists")]
    DuplicateKey(ItemId),

    /// No item with this identifier is stored.
    #[error("item with id {0} not found")]
    NotFound(ItemId),

    /// A requested quantity was negative.
    #[error("quantity cannot be negative (got {0})")]
    InvalidQuantity(Quantity),

    /// Adding to a quantity would leave the representable range.
    #[error("quantity overflow for item {id}: {current} + {delta} is out of range")]
    QuantityOverflow {
        id: ItemId,
        current: Quantity,
        delta: Quantity,
    },
}

impl InventoryError {
    /// Identifier involved in the failure, when the kind carries one.
    pub fn item_id(&self) -> Option<ItemId> {
        match self {
            Self::DuplicateKey(id) | Self::NotFound(id) => Some(*id),
            Self::QuantityOverflow { id, .. } => Some(*id),
            Self::InvalidQuantity(_) => None,
        }
    }

    /// Stable machine-readable name of the failure kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::DuplicateKey(_) => "duplicate_key",
            Self::NotFound(_) => "not_found",
            Self::InvalidQuantity(_) => "invalid_quantity",
            Self::QuantityOverflow { .. } => "quantity_overflow",
        }
    }
}
