//! Item capability contract and the identifiers stores are keyed by.

use serde::{Deserialize, Serialize};

/// Stock quantity.
///
/// Signed so that a negative request is representable and can be rejected;
/// stored quantities are always `>= 0`.
pub type Quantity = i64;

/// Identifier of an item, unique within a single store.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Minimal interface a type must expose to be held by a store.
///
/// Variants implement this directly; there is no shared base type. The id and
/// name are fixed at construction, only the quantity moves.
pub trait InventoryItem: Clone + core::fmt::Debug {
    /// Returns the item identifier.
    fn id(&self) -> ItemId;

    fn name(&self) -> &str;

    fn quantity(&self) -> Quantity;

    /// Overwrite the quantity.
    ///
    /// Stores call this only after validating the new value.
    fn set_quantity(&mut self, quantity: Quantity);
}
