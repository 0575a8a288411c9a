//! Full inventory listing

use crate::types::{Inventory, InventoryRecord};
use std::fmt;

/// Every item in the inventory, in iteration order
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryListing<'a> {
    entries: Vec<(&'a str, &'a InventoryRecord)>,
}

impl<'a> InventoryListing<'a> {
    /// Listed `(name, record)` pairs
    pub fn entries(&self) -> &[(&'a str, &'a InventoryRecord)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a listing of every item
pub fn list_all(inventory: &Inventory) -> InventoryListing<'_> {
    InventoryListing {
        entries: inventory
            .iter()
            .map(|(name, record)| (name.as_str(), record))
            .collect(),
    }
}

impl fmt::Display for InventoryListing<'_> {
    /// One line per item under a header, or a single line when empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "Inventory is empty.");
        }

        write!(f, "Current Inventory:")?;
        for (name, record) in &self.entries {
            write!(
                f,
                "\n{}: Quantity = {}, Price = {}",
                name, record.quantity, record.price
            )?;
        }
        Ok(())
    }
}
