//! Variant-agnostic stock operations.
//!
//! These work on any `InventoryStore<T>` and are the recovery boundary for
//! store failures: nothing here returns `Err`. A failure is logged and handed
//! back as [`Outcome::Reported`] so a batch of operations keeps going.

use warehouse_core::{InventoryError, InventoryItem, InventoryResult, ItemId, Quantity};

use crate::store::InventoryStore;

/// Result of a facade operation: either it went through, or the failure was
/// reported and absorbed here.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    Completed(T),
    Reported(InventoryError),
}

impl<T> Outcome<T> {
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed(_))
    }

    pub fn error(&self) -> Option<&InventoryError> {
        match self {
            Outcome::Completed(_) => None,
            Outcome::Reported(err) => Some(err),
        }
    }

    pub fn into_result(self) -> InventoryResult<T> {
        match self {
            Outcome::Completed(value) => Ok(value),
            Outcome::Reported(err) => Err(err),
        }
    }
}

/// Add `delta` to an item's quantity.
///
/// Lookup happens first (`NotFound`), then the checked sum
/// (`QuantityOverflow`), then the store update (`InvalidQuantity` when the
/// sum is negative). Yields the new quantity on success.
pub fn increase_stock<T: InventoryItem>(
    store: &mut InventoryStore<T>,
    id: ItemId,
    delta: Quantity,
) -> Outcome<Quantity> {
    match try_increase_stock(store, id, delta) {
        Ok(quantity) => {
            tracing::info!(item_id = %id, delta, quantity, "stock increased");
            Outcome::Completed(quantity)
        }
        Err(err) => {
            tracing::warn!(item_id = %id, delta, kind = err.kind(), error = %err, "increase stock failed");
            Outcome::Reported(err)
        }
    }
}

fn try_increase_stock<T: InventoryItem>(
    store: &mut InventoryStore<T>,
    id: ItemId,
    delta: Quantity,
) -> InventoryResult<Quantity> {
    let current = store.get_by_id(id)?.quantity();
    let quantity = current
        .checked_add(delta)
        .ok_or(InventoryError::QuantityOverflow { id, current, delta })?;

    store.update_quantity(id, quantity)?;
    Ok(quantity)
}

/// Remove an item, yielding it back on success.
pub fn remove_by_id<T: InventoryItem>(store: &mut InventoryStore<T>, id: ItemId) -> Outcome<T> {
    match store.remove(id) {
        Ok(item) => {
            tracing::info!(item_id = %id, "item removed");
            Outcome::Completed(item)
        }
        Err(err) => {
            tracing::warn!(item_id = %id, kind = err.kind(), error = %err, "remove item failed");
            Outcome::Reported(err)
        }
    }
}

/// Hand every item of a snapshot to `sink`. Returns how many were emitted.
pub fn print_all<T, F>(store: &InventoryStore<T>, mut sink: F) -> usize
where
    T: InventoryItem,
    F: FnMut(&T),
{
    let items = store.get_all();
    for item in &items {
        sink(item);
    }
    items.len()
}
