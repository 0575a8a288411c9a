//! Item-related types for the inventory tracker
//!
//! This module defines the per-item record and the mapping from item name to
//! record that makes up the whole inventory.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};

/// Item name (non-empty, case-sensitive)
pub type ItemName = String;

/// Unit count held for an item
pub type Quantity = u32;

/// Stock record for a single item
///
/// Serialized as `{"quantity": <integer>, "price": <number>}`. The price is
/// written as a JSON number carrying its exact decimal digits, rather than the
/// string form `Decimal` uses by default or a lossy `f64`, so every price the
/// store accepts reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    /// Units currently in stock
    pub quantity: Quantity,

    /// Unit price, fixed when the record is first created
    ///
    /// Later additions to the same item never overwrite it.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
}

impl InventoryRecord {
    /// Create a record with the given stock and unit price
    pub fn new(quantity: Quantity, price: Decimal) -> Self {
        InventoryRecord { quantity, price }
    }
}

/// Mapping from item name to stock record
///
/// Serializes transparently as a single JSON object keyed by item name.
/// Iteration is in ascending name order; the order carries no meaning beyond
/// making listings deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: BTreeMap<ItemName, InventoryRecord>,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&InventoryRecord> {
        self.items.get(name)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut InventoryRecord> {
        self.items.get_mut(name)
    }

    pub(crate) fn insert(&mut self, name: ItemName, record: InventoryRecord) {
        self.items.insert(name, record);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<InventoryRecord> {
        self.items.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over `(name, record)` pairs in name order
    pub fn iter(&self) -> btree_map::Iter<'_, ItemName, InventoryRecord> {
        self.items.iter()
    }
}

impl FromIterator<(ItemName, InventoryRecord)> for Inventory {
    fn from_iter<I: IntoIterator<Item = (ItemName, InventoryRecord)>>(iter: I) -> Self {
        Inventory {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = (&'a ItemName, &'a InventoryRecord);
    type IntoIter = btree_map::Iter<'a, ItemName, InventoryRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
