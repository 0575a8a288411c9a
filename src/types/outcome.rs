//! Typed outcomes for successful inventory operations
//!
//! Failures are reported through [`InventoryError`](super::InventoryError);
//! these enums describe which of the successful paths an operation took.

use super::item::{Inventory, Quantity};

/// Result of a successful `add`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new record was created
    Added { quantity: Quantity },
    /// An existing record's stock was increased; its price was kept
    Increased { quantity: Quantity },
}

impl AddOutcome {
    /// Stock held for the item after the add
    pub fn quantity(&self) -> Quantity {
        match self {
            AddOutcome::Added { quantity } | AddOutcome::Increased { quantity } => *quantity,
        }
    }
}

/// Result of a successful `remove`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Stock was reduced and some remains
    Removed { remaining: Quantity },
    /// Stock reached zero and the record was deleted
    OutOfStock,
}

impl RemoveOutcome {
    pub fn remaining(&self) -> Quantity {
        match self {
            RemoveOutcome::Removed { remaining } => *remaining,
            RemoveOutcome::OutOfStock => 0,
        }
    }
}

/// Result of a successful `load`
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The data file was read and decoded
    Loaded(Inventory),
    /// No data file exists yet; start with an empty inventory
    Missing,
}

impl LoadOutcome {
    /// Take the loaded inventory, or an empty one when the file was missing
    pub fn into_inventory(self) -> Inventory {
        match self {
            LoadOutcome::Loaded(inventory) => inventory,
            LoadOutcome::Missing => Inventory::new(),
        }
    }
}
