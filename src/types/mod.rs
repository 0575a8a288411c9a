//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `item`: Inventory records and the name-to-record mapping
//! - `outcome`: Typed results of store and persistence operations
//! - `error`: Error types for the inventory tracker

pub mod error;
pub mod item;
pub mod outcome;

pub use error::InventoryError;
pub use item::{Inventory, InventoryRecord, ItemName, Quantity};
pub use outcome::{AddOutcome, LoadOutcome, RemoveOutcome};
