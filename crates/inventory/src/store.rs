use std::collections::HashMap;

use warehouse_core::{InventoryError, InventoryItem, InventoryResult, ItemId, Quantity};

/// In-memory keyed store for one item variant.
///
/// Holds at most one item per id, and every entry is keyed by its own
/// `id()`. Not synchronized: callers that share a store across threads must
/// wrap it in their own lock.
#[derive(Debug, Clone)]
pub struct InventoryStore<T> {
    items: HashMap<ItemId, T>,
}

impl<T> InventoryStore<T> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }
}

impl<T> Default for InventoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: InventoryItem> InventoryStore<T> {
    /// Build a store by adding each item in turn.
    ///
    /// Stops at the first duplicate id.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> InventoryResult<Self> {
        let mut store = Self::new();
        for item in items {
            store.add(item)?;
        }
        Ok(store)
    }

    /// Insert a new item. Fails with `DuplicateKey` if the id is taken; the
    /// store is left untouched in that case.
    pub fn add(&mut self, item: T) -> InventoryResult<()> {
        let id = item.id();
        if self.items.contains_key(&id) {
            return Err(InventoryError::DuplicateKey(id));
        }

        tracing::debug!(item_id = %id, name = item.name(), "item added");
        self.items.insert(id, item);
        Ok(())
    }

    pub fn get_by_id(&self, id: ItemId) -> InventoryResult<&T> {
        self.items.get(&id).ok_or(InventoryError::NotFound(id))
    }

    /// Remove an item and hand it back to the caller.
    pub fn remove(&mut self, id: ItemId) -> InventoryResult<T> {
        let item = self
            .items
            .remove(&id)
            .ok_or(InventoryError::NotFound(id))?;

        tracing::debug!(item_id = %id, "item removed");
        Ok(item)
    }

    /// Snapshot of every stored item, in no particular order.
    pub fn get_all(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }

    /// Replace an item's quantity.
    ///
    /// The sign check runs before the lookup: a negative quantity is reported
    /// as `InvalidQuantity` even when `id` is absent.
    pub fn update_quantity(&mut self, id: ItemId, new_quantity: Quantity) -> InventoryResult<()> {
        if new_quantity < 0 {
            return Err(InventoryError::InvalidQuantity(new_quantity));
        }

        let item = self
            .items
            .get_mut(&id)
            .ok_or(InventoryError::NotFound(id))?;

        let previous = item.quantity();
        item.set_quantity(new_quantity);

        tracing::debug!(item_id = %id, previous, quantity = new_quantity, "quantity updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ElectronicItem, PerishableItem};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn electronic(id: i64, quantity: Quantity) -> ElectronicItem {
        ElectronicItem::new(ItemId::new(id), format!("item-{id}"), quantity, "Acer", 12)
    }

    fn sorted_ids<T: InventoryItem>(items: &[T]) -> Vec<ItemId> {
        let mut ids: Vec<ItemId> = items.iter().map(|i| i.id()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn new_store_is_empty() {
        let store: InventoryStore<ElectronicItem> = InventoryStore::new();

        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn add_then_get_by_id_returns_equal_item() {
        let mut store = InventoryStore::new();
        let laptop = ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Acer", 24);

        store.add(laptop.clone()).unwrap();

        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap(), &laptop);
        assert!(store.contains(ItemId::new(1)));
    }

    #[test]
    fn add_rejects_duplicate_and_keeps_original() {
        let mut store = InventoryStore::new();
        store.add(electronic(1, 5)).unwrap();

        let err = store
            .add(ElectronicItem::new(ItemId::new(1), "Other", 99, "Dell", 6))
            .unwrap_err();

        assert_eq!(err, InventoryError::DuplicateKey(ItemId::new(1)));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap(), &electronic(1, 5));
    }

    #[test]
    fn get_by_id_missing_is_not_found() {
        let store: InventoryStore<ElectronicItem> = InventoryStore::new();

        let err = store.get_by_id(ItemId::new(3)).unwrap_err();
        assert_eq!(err, InventoryError::NotFound(ItemId::new(3)));
    }

    #[test]
    fn remove_on_empty_store_is_not_found() {
        let mut store: InventoryStore<ElectronicItem> = InventoryStore::new();

        let err = store.remove(ItemId::new(999)).unwrap_err();

        assert_eq!(err, InventoryError::NotFound(ItemId::new(999)));
        assert!(store.get_all().is_empty());
    }

    #[test]
    fn remove_returns_the_item_and_forgets_it() {
        let mut store = InventoryStore::new();
        store.add(electronic(1, 5)).unwrap();
        store.add(electronic(2, 10)).unwrap();

        let removed = store.remove(ItemId::new(2)).unwrap();

        assert_eq!(removed, electronic(2, 10));
        assert_eq!(store.len(), 1);
        assert_eq!(
            store.get_by_id(ItemId::new(2)).unwrap_err(),
            InventoryError::NotFound(ItemId::new(2))
        );
    }

    #[test]
    fn get_all_is_a_detached_snapshot() {
        let mut store = InventoryStore::new();
        store.add(electronic(1, 5)).unwrap();

        let mut snapshot = store.get_all();
        snapshot[0].set_quantity(500);
        snapshot.clear();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap().quantity(), 5);
    }

    #[test]
    fn update_quantity_replaces_only_quantity() {
        let mut store = InventoryStore::new();
        let expiry = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        store
            .add(PerishableItem::new(ItemId::new(101), "Rice", 50, expiry))
            .unwrap();

        store.update_quantity(ItemId::new(101), 0).unwrap();

        let rice = store.get_by_id(ItemId::new(101)).unwrap();
        assert_eq!(rice.quantity(), 0);
        assert_eq!(rice.name(), "Rice");
        assert_eq!(rice.expiry_date(), expiry);
    }

    #[test]
    fn update_quantity_missing_id_is_not_found() {
        let mut store: InventoryStore<ElectronicItem> = InventoryStore::new();

        let err = store.update_quantity(ItemId::new(4), 1).unwrap_err();
        assert_eq!(err, InventoryError::NotFound(ItemId::new(4)));
    }

    #[test]
    fn negative_quantity_is_checked_before_existence() {
        let mut store = InventoryStore::new();
        store.add(electronic(1, 5)).unwrap();

        // Existing id.
        assert_eq!(
            store.update_quantity(ItemId::new(1), -1).unwrap_err(),
            InventoryError::InvalidQuantity(-1)
        );
        // Missing id: still InvalidQuantity, not NotFound.
        assert_eq!(
            store.update_quantity(ItemId::new(2), -1).unwrap_err(),
            InventoryError::InvalidQuantity(-1)
        );
        assert_eq!(store.get_by_id(ItemId::new(1)).unwrap().quantity(), 5);
    }

    #[test]
    fn from_items_stops_at_first_duplicate() {
        let ok = InventoryStore::from_items([electronic(1, 1), electronic(2, 2)]).unwrap();
        assert_eq!(ok.len(), 2);

        let err = InventoryStore::from_items([electronic(1, 1), electronic(1, 2)]).unwrap_err();
        assert_eq!(err, InventoryError::DuplicateKey(ItemId::new(1)));
    }

    #[test]
    fn stores_of_different_variants_are_keyed_independently() {
        let mut electronics = InventoryStore::new();
        let mut perishables = InventoryStore::new();
        let expiry = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();

        electronics.add(electronic(1, 5)).unwrap();
        perishables
            .add(PerishableItem::new(ItemId::new(1), "Milk", 3, expiry))
            .unwrap();

        assert_eq!(electronics.get_by_id(ItemId::new(1)).unwrap().name(), "item-1");
        assert_eq!(perishables.get_by_id(ItemId::new(1)).unwrap().name(), "Milk");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: distinct ids all go in, and the snapshot holds exactly them.
        #[test]
        fn distinct_ids_are_all_stored(
            ids in prop::collection::hash_set(any::<i64>(), 0..32),
            quantity in 0i64..1_000,
        ) {
            let mut store = InventoryStore::new();
            for id in &ids {
                prop_assert!(store.add(electronic(*id, quantity)).is_ok());
            }

            let mut expected: Vec<ItemId> = ids.iter().copied().map(ItemId::new).collect();
            expected.sort();
            prop_assert_eq!(sorted_ids(&store.get_all()), expected);
        }

        /// Property: a rejected duplicate leaves the store exactly as it was.
        #[test]
        fn duplicate_add_does_not_change_contents(
            id in any::<i64>(),
            first in 0i64..1_000,
            second in 0i64..1_000,
        ) {
            let mut store = InventoryStore::new();
            store.add(electronic(id, first)).unwrap();

            let err = store.add(electronic(id, second)).unwrap_err();

            prop_assert_eq!(err, InventoryError::DuplicateKey(ItemId::new(id)));
            prop_assert_eq!(store.get_all(), vec![electronic(id, first)]);
        }

        /// Property: any negative quantity is InvalidQuantity, present or not.
        #[test]
        fn negative_quantity_always_invalid(
            id in any::<i64>(),
            present in any::<bool>(),
            quantity in i64::MIN..0,
        ) {
            let mut store = InventoryStore::new();
            if present {
                store.add(electronic(id, 1)).unwrap();
            }

            prop_assert_eq!(
                store.update_quantity(ItemId::new(id), quantity),
                Err(InventoryError::InvalidQuantity(quantity))
            );
        }
    }
}
