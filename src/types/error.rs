//! Error types for the inventory tracker
//!
//! This module defines all error types that can occur while mutating the
//! inventory or moving it to and from disk. Errors are designed to be
//! descriptive and user-friendly for the interactive shell.
//!
//! # Error Categories
//!
//! - **Stock Errors**: Unknown item, insufficient stock, quantity overflow
//! - **Validation Errors**: Empty names, zero quantities, negative prices
//! - **Persistence Errors**: Unreadable, corrupt or unwritable data files
//!
//! None of these are fatal. The shell reports them and keeps running.

use rust_decimal::Decimal;
use thiserror::Error;

use super::item::Quantity;

/// Main error type for the inventory tracker
///
/// Each variant includes relevant context to help diagnose the issue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InventoryError {
    /// Removal requested for an item that is not stocked
    ///
    /// The inventory is left unchanged.
    #[error("Item '{name}' not found")]
    ItemNotFound {
        /// The requested item name
        name: String,
    },

    /// Removal requested for more units than are in stock
    ///
    /// The inventory is left unchanged.
    #[error("Cannot remove {requested} of '{name}'; only {available} in stock")]
    InsufficientStock {
        /// Item name
        name: String,
        /// Units currently in stock
        available: Quantity,
        /// Units requested for removal
        requested: Quantity,
    },

    /// Item names must be non-empty
    #[error("Item name must not be empty")]
    InvalidItemName,

    /// Quantities passed to add/remove must be positive
    #[error("Quantity for '{name}' must be greater than zero")]
    InvalidQuantity {
        /// Item name
        name: String,
    },

    /// Prices must be non-negative
    #[error("Price {price} for '{name}' must not be negative")]
    InvalidPrice {
        /// Item name
        name: String,
        /// The rejected price
        price: Decimal,
    },

    /// Adding would push the item's stock past the representable maximum
    #[error("Adding {requested} to '{name}' would overflow its stock of {available}")]
    QuantityOverflow {
        /// Item name
        name: String,
        /// Units currently in stock
        available: Quantity,
        /// Units requested to add
        requested: Quantity,
    },

    /// I/O error while reading or writing the data file
    #[error("I/O error on {path}: {message}")]
    Io {
        /// The data file path
        path: String,
        /// Description of the I/O error
        message: String,
    },

    /// The data file exists but is not a valid inventory document
    #[error("Failed to decode {path}: {message}")]
    Decode {
        /// The data file path
        path: String,
        /// Description of the decode error
        message: String,
    },

    /// The data file is valid JSON but holds a record the inventory forbids
    ///
    /// Empty item names and negative prices are rejected when loading.
    #[error("Invalid record '{name}' in {path}: {reason}")]
    InvalidRecord {
        /// The data file path
        path: String,
        /// Name of the offending item
        name: String,
        /// Why the record was rejected
        reason: String,
    },

    /// The inventory could not be encoded as JSON
    #[error("Failed to encode inventory: {message}")]
    Encode {
        /// Description of the encode error
        message: String,
    },
}

// Helper functions for creating common errors

impl InventoryError {
    /// Create an ItemNotFound error
    pub fn item_not_found(name: &str) -> Self {
        InventoryError::ItemNotFound {
            name: name.to_string(),
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(name: &str, available: Quantity, requested: Quantity) -> Self {
        InventoryError::InsufficientStock {
            name: name.to_string(),
            available,
            requested,
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(name: &str) -> Self {
        InventoryError::InvalidQuantity {
            name: name.to_string(),
        }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(name: &str, price: Decimal) -> Self {
        InventoryError::InvalidPrice {
            name: name.to_string(),
            price,
        }
    }

    /// Create a QuantityOverflow error
    pub fn quantity_overflow(name: &str, available: Quantity, requested: Quantity) -> Self {
        InventoryError::QuantityOverflow {
            name: name.to_string(),
            available,
            requested,
        }
    }

    /// Create an Io error for the given path
    pub fn io(path: &std::path::Path, error: &std::io::Error) -> Self {
        InventoryError::Io {
            path: path.display().to_string(),
            message: error.to_string(),
        }
    }

    /// Create a Decode error for the given path
    pub fn decode(path: &std::path::Path, message: impl Into<String>) -> Self {
        InventoryError::Decode {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Create an InvalidRecord error for the given path
    pub fn invalid_record(path: &std::path::Path, name: &str, reason: impl Into<String>) -> Self {
        InventoryError::InvalidRecord {
            path: path.display().to_string(),
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether this error came from the data file rather than a stock operation
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            InventoryError::Io { .. }
                | InventoryError::Decode { .. }
                | InventoryError::InvalidRecord { .. }
                | InventoryError::Encode { .. }
        )
    }
}

// Conversion from serde_json::Error; only encoding lacks a path to report
impl From<serde_json::Error> for InventoryError {
    fn from(error: serde_json::Error) -> Self {
        InventoryError::Encode {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::Path;

    #[rstest]
    #[case::item_not_found(
        InventoryError::ItemNotFound { name: "Widget".to_string() },
        "Item 'Widget' not found"
    )]
    #[case::insufficient_stock(
        InventoryError::InsufficientStock {
            name: "Widget".to_string(),
            available: 2,
            requested: 5,
        },
        "Cannot remove 5 of 'Widget'; only 2 in stock"
    )]
    #[case::invalid_item_name(InventoryError::InvalidItemName, "Item name must not be empty")]
    #[case::invalid_quantity(
        InventoryError::InvalidQuantity { name: "Widget".to_string() },
        "Quantity for 'Widget' must be greater than zero"
    )]
    #[case::invalid_price(
        InventoryError::InvalidPrice { name: "Widget".to_string(), price: Decimal::new(-150, 2) },
        "Price -1.50 for 'Widget' must not be negative"
    )]
    #[case::quantity_overflow(
        InventoryError::QuantityOverflow {
            name: "Widget".to_string(),
            available: u32::MAX,
            requested: 1,
        },
        "Adding 1 to 'Widget' would overflow its stock of 4294967295"
    )]
    #[case::io(
        InventoryError::Io {
            path: "data.json".to_string(),
            message: "Permission denied".to_string(),
        },
        "I/O error on data.json: Permission denied"
    )]
    #[case::decode(
        InventoryError::Decode {
            path: "data.json".to_string(),
            message: "expected value".to_string(),
        },
        "Failed to decode data.json: expected value"
    )]
    #[case::invalid_record(
        InventoryError::InvalidRecord {
            path: "data.json".to_string(),
            name: "Widget".to_string(),
            reason: "price -1 is negative".to_string(),
        },
        "Invalid record 'Widget' in data.json: price -1 is negative"
    )]
    fn test_error_display(#[case] error: InventoryError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::item_not_found(
        InventoryError::item_not_found("Widget"),
        InventoryError::ItemNotFound { name: "Widget".to_string() }
    )]
    #[case::insufficient_stock(
        InventoryError::insufficient_stock("Widget", 2, 5),
        InventoryError::InsufficientStock { name: "Widget".to_string(), available: 2, requested: 5 }
    )]
    #[case::invalid_quantity(
        InventoryError::invalid_quantity("Widget"),
        InventoryError::InvalidQuantity { name: "Widget".to_string() }
    )]
    #[case::decode(
        InventoryError::decode(Path::new("data.json"), "bad"),
        InventoryError::Decode { path: "data.json".to_string(), message: "bad".to_string() }
    )]
    #[case::invalid_record(
        InventoryError::invalid_record(Path::new("data.json"), "", "empty name"),
        InventoryError::InvalidRecord {
            path: "data.json".to_string(),
            name: String::new(),
            reason: "empty name".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: InventoryError, #[case] expected: InventoryError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_helper() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error = InventoryError::io(Path::new("data.json"), &io_error);
        assert!(error.is_persistence());
        assert_eq!(error.to_string(), "I/O error on data.json: Permission denied");
    }

    #[test]
    fn test_invalid_record_is_a_persistence_error() {
        let error = InventoryError::invalid_record(Path::new("data.json"), "Widget", "bad");
        assert!(error.is_persistence());
    }

    #[test]
    fn test_stock_errors_are_not_persistence_errors() {
        assert!(!InventoryError::item_not_found("Widget").is_persistence());
        assert!(!InventoryError::InvalidItemName.is_persistence());
    }
}
