//! Sample data for the demo stores.

use chrono::{Days, Months, NaiveDate};
use warehouse_inventory::{ElectronicItem, ItemId, PerishableItem};

pub fn electronics() -> Vec<ElectronicItem> {
    vec![
        ElectronicItem::new(ItemId::new(1), "Laptop", 5, "Acer", 24),
        ElectronicItem::new(ItemId::new(2), "Smartphone", 10, "Samsung", 12),
    ]
}

/// Perishables with expiry dates relative to `today`.
pub fn perishables(today: NaiveDate) -> Vec<PerishableItem> {
    let six_months = today
        .checked_add_months(Months::new(6))
        .unwrap_or(NaiveDate::MAX);
    let ten_days = today.checked_add_days(Days::new(10)).unwrap_or(NaiveDate::MAX);

    vec![
        PerishableItem::new(ItemId::new(101), "Rice", 50, six_months),
        PerishableItem::new(ItemId::new(102), "Milk", 20, ten_days),
    ]
}
