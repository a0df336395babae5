//! Console rendering of item snapshots.

use serde::Serialize;
use warehouse_inventory::{ElectronicItem, InventoryItem, PerishableItem};

use crate::config::OutputFormat;

/// One-line console form of an item.
pub trait ConsoleLine: InventoryItem + Serialize {
    fn text_line(&self) -> String;
}

impl ConsoleLine for ElectronicItem {
    fn text_line(&self) -> String {
        format!(
            "[E] {} - {} ({}) Qty: {} Warranty: {}mo",
            self.id(),
            self.name(),
            self.brand(),
            self.quantity(),
            self.warranty_months()
        )
    }
}

impl ConsoleLine for PerishableItem {
    fn text_line(&self) -> String {
        format!(
            "[G] {} - {} Qty: {} Expiry: {}",
            self.id(),
            self.name(),
            self.quantity(),
            self.expiry_date().format("%Y-%m-%d")
        )
    }
}

pub fn render<T: ConsoleLine>(item: &T, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(item.text_line()),
        OutputFormat::Json => serde_json::to_string(item),
    }
}
