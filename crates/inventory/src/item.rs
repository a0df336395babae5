use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use warehouse_core::{InventoryItem, ItemId, Quantity};

/// Electronic goods: carry a brand and a warranty period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectronicItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    brand: String,
    warranty_months: u32,
}

impl ElectronicItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        brand: impl Into<String>,
        warranty_months: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            brand: brand.into(),
            warranty_months,
        }
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn warranty_months(&self) -> u32 {
        self.warranty_months
    }
}

impl InventoryItem for ElectronicItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}

/// Goods with a shelf life.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerishableItem {
    id: ItemId,
    name: String,
    quantity: Quantity,
    expiry_date: NaiveDate,
}

impl PerishableItem {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: Quantity,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            expiry_date,
        }
    }

    pub fn expiry_date(&self) -> NaiveDate {
        self.expiry_date
    }

    /// True once `on` is past the expiry date (the expiry day itself is still good).
    pub fn is_expired(&self, on: NaiveDate) -> bool {
        on > self.expiry_date
    }
}

impl InventoryItem for PerishableItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn quantity(&self) -> Quantity {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: Quantity) {
        self.quantity = quantity;
    }
}
