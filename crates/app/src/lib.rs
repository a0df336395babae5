//! `warehouse-app`: the demo warehouse program.
//!
//! Thin glue around `warehouse-inventory`: reads configuration, seeds two
//! stores, renders them to the console and walks through the normal and
//! failing paths of every stock operation.

pub mod config;
pub mod manager;
pub mod render;
pub mod seed;

pub use config::{AppConfig, ConfigError, OutputFormat};
pub use manager::WarehouseManager;
