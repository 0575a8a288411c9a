//! Core traits for inventory persistence
//!
//! This module defines the trait abstraction that lets the shell load and
//! save the inventory without knowing where it is stored.

use crate::types::{Inventory, InventoryError, LoadOutcome};

/// Trait for loading and saving the whole inventory as a single blob
///
/// Implementations log every outcome themselves (warning on a missing store,
/// error on a failed read or write) and also return it, so callers may either
/// inspect the result or simply carry on.
pub trait Persistence {
    /// Read the stored inventory
    ///
    /// A store that does not exist yet is not an error; it yields
    /// [`LoadOutcome::Missing`].
    fn load(&self) -> Result<LoadOutcome, InventoryError>;

    /// Replace the stored inventory with `inventory`
    fn save(&self, inventory: &Inventory) -> Result<(), InventoryError>;
}
