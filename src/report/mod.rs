//! Reporting module
//!
//! Read-only views over the inventory. Each report is a value that renders
//! itself through `Display`, so the shell prints it and tests inspect it:
//! - `listing` - Every item with its quantity and price
//! - `low_stock` - Items whose stock is below a threshold

pub mod listing;
pub mod low_stock;

pub use listing::{list_all, InventoryListing};
pub use low_stock::{low_stock, LowStockItem, LowStockReport};
