//! Inventory Tracker Library
//! # Overview
//!
//! This library tracks named inventory items (quantity and unit price) in
//! memory, persists them to a JSON file, and drives everything from a
//! numbered text menu.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (InventoryRecord, Inventory, outcomes, errors)
//! - [`config`] - Session configuration and its defaults
//! - [`cli`] - CLI arguments parsing
//! - [`logging`] - Tracing subscriber setup with a configurable sink
//! - [`core`] - Business logic components:
//!   - [`core::inventory_store`] - Stock mutations over the in-memory inventory
//!   - [`core::traits`] - The persistence abstraction
//! - [`io`] - JSON data file encoding and storage
//! - [`report`] - Full listing and low-stock reporting
//! - [`shell`] - The interactive menu loop
//!
//! # Operations
//!
//! - **Add**: Create an item, or increase the stock of an existing one
//! - **Remove**: Decrease stock; an item whose stock reaches zero is deleted
//! - **View Quantity**: Stock of one item, 0 if it is not stocked
//! - **View All**: Every item with its quantity and price
//! - **Check Low Stock**: Items with stock strictly below the threshold
//! - **Save & Exit**: Write the inventory to disk and end the session
//!
//! Every operation emits a log event; failed operations also return an
//! [`InventoryError`](types::InventoryError) and leave the inventory unchanged.

pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod logging;
pub mod report;
pub mod shell;
pub mod types;
