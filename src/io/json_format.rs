//! JSON format handling for the inventory data file
//!
//! This module centralizes all file format concerns, providing:
//! - Encoding of the inventory as an indented JSON object
//! - Decoding and validation of a data file's contents
//!
//! All functions are pure (no I/O) for easy testing.

use crate::types::{Inventory, InventoryError};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::Path;

/// Indentation used when writing the data file
const INDENT: &[u8] = b"    ";

/// Encode the inventory as a JSON object indented by four spaces
///
/// Prices are written with their exact decimal digits, so decoding the
/// output yields an equal inventory.
///
/// # Returns
///
/// * `Ok(Vec<u8>)` - UTF-8 JSON text
/// * `Err(InventoryError::Encode)` - If serialization failed
pub fn encode_inventory(inventory: &Inventory) -> Result<Vec<u8>, InventoryError> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    inventory.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Decode and validate the contents of a data file
///
/// The document must be a single JSON object keyed by item name, each value
/// holding an integer `quantity` and a numeric `price`. Beyond what the types
/// enforce, names must be non-empty and prices non-negative.
///
/// # Arguments
///
/// * `contents` - The file contents
/// * `path` - The file path, used only for error messages
pub fn decode_inventory(contents: &str, path: &Path) -> Result<Inventory, InventoryError> {
    let inventory: Inventory =
        serde_json::from_str(contents).map_err(|e| InventoryError::decode(path, e.to_string()))?;

    for (name, record) in &inventory {
        if name.is_empty() {
            return Err(InventoryError::invalid_record(
                path,
                name,
                "item name must not be empty",
            ));
        }
        if record.price.is_sign_negative() && !record.price.is_zero() {
            return Err(InventoryError::invalid_record(
                path,
                name,
                format!("price {} is negative", record.price),
            ));
        }
    }

    Ok(inventory)
}
