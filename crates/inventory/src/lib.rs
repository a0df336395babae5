//! Inventory store module.
//!
//! This crate contains the generic keyed store, the concrete item variants it
//! is instantiated with, and the variant-agnostic stock operations built on
//! top of it. Everything here is in-memory and synchronous.

pub mod item;
pub mod operations;
pub mod store;

pub use item::{ElectronicItem, PerishableItem};
pub use operations::{Outcome, increase_stock, print_all, remove_by_id};
pub use store::InventoryStore;

pub use warehouse_core::{InventoryError, InventoryItem, InventoryResult, ItemId, Quantity};
