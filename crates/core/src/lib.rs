//! `warehouse-core`: inventory building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO): the
//! item capability contract and the failure taxonomy every store shares.

pub mod error;
pub mod item;

pub use error::{InventoryError, InventoryResult};
pub use item::{InventoryItem, ItemId, Quantity};
