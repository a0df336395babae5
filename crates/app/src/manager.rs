use std::io::Write;

use chrono::{Months, NaiveDate};
use warehouse_inventory::{
    ElectronicItem, InventoryItem, InventoryStore, ItemId, Outcome, PerishableItem,
    increase_stock, print_all, remove_by_id,
};

use crate::config::OutputFormat;
use crate::render::{ConsoleLine, render};
use crate::seed;

/// Owns one store per item variant and drives the demo scenario.
///
/// The two stores are keyed independently: electronics and perishables may
/// reuse each other's ids.
#[derive(Debug, Default)]
pub struct WarehouseManager {
    electronics: InventoryStore<ElectronicItem>,
    perishables: InventoryStore<PerishableItem>,
    output: OutputFormat,
}

impl WarehouseManager {
    pub fn new(output: OutputFormat) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    pub fn electronics(&self) -> &InventoryStore<ElectronicItem> {
        &self.electronics
    }

    pub fn perishables(&self) -> &InventoryStore<PerishableItem> {
        &self.perishables
    }

    /// Load the sample items. A rejected item is logged and skipped.
    pub fn seed_data(&mut self, today: NaiveDate) {
        for item in seed::electronics() {
            if let Err(err) = self.electronics.add(item) {
                tracing::error!(kind = err.kind(), error = %err, "seed error");
            }
        }
        for item in seed::perishables(today) {
            if let Err(err) = self.perishables.add(item) {
                tracing::error!(kind = err.kind(), error = %err, "seed error");
            }
        }

        tracing::info!(
            electronics = self.electronics.len(),
            perishables = self.perishables.len(),
            "sample data seeded"
        );
    }

    /// Write every item of `store`, one per line, ordered by id.
    pub fn print_items<T: ConsoleLine>(
        &self,
        store: &InventoryStore<T>,
        out: &mut impl Write,
    ) -> anyhow::Result<()> {
        let mut rendered = Vec::with_capacity(store.len());
        print_all(store, |item| rendered.push((item.id(), render(item, self.output))));
        rendered.sort_by_key(|(id, _)| *id);

        for (_, line) in rendered {
            writeln!(out, "{}", line?)?;
        }
        Ok(())
    }

    /// Seed, print, exercise the failure paths, print again.
    pub fn run(&mut self, today: NaiveDate, out: &mut impl Write) -> anyhow::Result<()> {
        self.seed_data(today);

        writeln!(out, "Perishable items:")?;
        self.print_items(&self.perishables, out)?;

        writeln!(out, "\nElectronic items:")?;
        self.print_items(&self.electronics, out)?;

        let next_year = today
            .checked_add_months(Months::new(12))
            .unwrap_or(NaiveDate::MAX);
        let sugar = PerishableItem::new(ItemId::new(101), "Sugar", 5, next_year);
        if let Err(err) = self.perishables.add(sugar) {
            writeln!(out, "\nDuplicate add caught: {err}")?;
        }

        match remove_by_id(&mut self.electronics, ItemId::new(999)) {
            Outcome::Completed(item) => writeln!(out, "Removed item {}", item.id())?,
            Outcome::Reported(err) => writeln!(out, "Error removing item: {err}")?,
        }

        if let Err(err) = self.electronics.update_quantity(ItemId::new(1), -10) {
            writeln!(out, "\nInvalid quantity caught: {err}")?;
        }

        match increase_stock(&mut self.electronics, ItemId::new(1), 3) {
            Outcome::Completed(quantity) => writeln!(out, "Increased item 1 to {quantity}")?,
            Outcome::Reported(err) => writeln!(out, "Error increasing stock: {err}")?,
        }

        writeln!(out, "\nFinal inventories:")?;
        self.print_items(&self.perishables, out)?;
        self.print_items(&self.electronics, out)?;

        Ok(())
    }
}
