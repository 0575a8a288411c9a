//! Inventory store module
//!
//! This module provides the `InventoryStore` struct which owns the in-memory
//! inventory and applies stock mutations to it.
//!
//! The InventoryStore is responsible for:
//! - Creating records on the first add of an item
//! - Increasing stock on later adds without touching the stored price
//! - Decreasing stock on removal and deleting records that reach zero
//! - Rejecting invalid requests without mutating anything
//!
//! Every mutation, accepted or rejected, emits one log event.

use crate::types::{
    AddOutcome, Inventory, InventoryError, InventoryRecord, Quantity, RemoveOutcome,
};
use rust_decimal::Decimal;
use tracing::{info, warn};

/// Owns the inventory for the lifetime of a session
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    /// Map of item names to stock records
    inventory: Inventory,
}

impl InventoryStore {
    /// Create a store with no items
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store over a previously loaded inventory
    pub fn from_inventory(inventory: Inventory) -> Self {
        InventoryStore { inventory }
    }

    /// Add stock for an item
    ///
    /// If the item exists its quantity is increased and `price` is ignored.
    /// Otherwise a new record `{quantity, price}` is created.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the inventory unchanged, if:
    /// - `name` is empty
    /// - `quantity` is zero
    /// - `price` is negative (checked for new items only, since it is
    ///   otherwise ignored)
    /// - the new stock would overflow
    pub fn add(
        &mut self,
        name: &str,
        quantity: Quantity,
        price: Decimal,
    ) -> Result<AddOutcome, InventoryError> {
        if name.is_empty() {
            warn!("Rejected add with an empty item name");
            return Err(InventoryError::InvalidItemName);
        }
        if quantity == 0 {
            warn!("Rejected add of zero units of {}", name);
            return Err(InventoryError::invalid_quantity(name));
        }

        if let Some(record) = self.inventory.get_mut(name) {
            let new_quantity = record.quantity.checked_add(quantity).ok_or_else(|| {
                warn!(
                    "Cannot add {} of {}; stock of {} would overflow",
                    quantity, name, record.quantity
                );
                InventoryError::quantity_overflow(name, record.quantity, quantity)
            })?;

            record.quantity = new_quantity;
            info!("Increased quantity for {} by {}", name, quantity);
            return Ok(AddOutcome::Increased {
                quantity: new_quantity,
            });
        }

        if price.is_sign_negative() && !price.is_zero() {
            warn!("Rejected new item {} with negative price {}", name, price);
            return Err(InventoryError::invalid_price(name, price));
        }

        self.inventory
            .insert(name.to_string(), InventoryRecord::new(quantity, price));
        info!("Added new item {} with quantity {}", name, quantity);
        Ok(AddOutcome::Added { quantity })
    }

    /// Remove stock for an item
    ///
    /// Decreases the item's quantity. When it reaches exactly zero the record
    /// is deleted.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the inventory unchanged, if:
    /// - `quantity` is zero
    /// - the item is not stocked
    /// - fewer than `quantity` units are in stock
    pub fn remove(
        &mut self,
        name: &str,
        quantity: Quantity,
    ) -> Result<RemoveOutcome, InventoryError> {
        if quantity == 0 {
            warn!("Rejected removal of zero units of {}", name);
            return Err(InventoryError::invalid_quantity(name));
        }

        let Some(record) = self.inventory.get_mut(name) else {
            warn!("Attempted to remove {} but item not found", name);
            return Err(InventoryError::item_not_found(name));
        };

        if record.quantity < quantity {
            warn!(
                "Cannot remove {} of {}; only {} in stock",
                quantity, name, record.quantity
            );
            return Err(InventoryError::insufficient_stock(
                name,
                record.quantity,
                quantity,
            ));
        }

        record.quantity -= quantity;
        let remaining = record.quantity;
        info!("Removed {} of {}", quantity, name);

        if remaining == 0 {
            self.inventory.remove(name);
            info!("Item {} is now out of stock and removed", name);
            return Ok(RemoveOutcome::OutOfStock);
        }

        Ok(RemoveOutcome::Removed { remaining })
    }

    /// Units in stock for an item, or 0 if it is not stocked
    pub fn get_quantity(&self, name: &str) -> Quantity {
        self.inventory
            .get(name)
            .map_or(0, |record| record.quantity)
    }

    /// The full record for an item, if stocked
    pub fn get(&self, name: &str) -> Option<&InventoryRecord> {
        self.inventory.get(name)
    }

    /// Number of distinct items
    pub fn len(&self) -> usize {
        self.inventory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.is_empty()
    }

    /// Read-only view of the whole inventory, for reporting and saving
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Consume the store, yielding its inventory
    pub fn into_inventory(self) -> Inventory {
        self.inventory
    }
}
