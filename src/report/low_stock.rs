//! Low-stock report
//!
//! An item is low on stock when its quantity is strictly below the
//! threshold; an item sitting exactly at the threshold is not reported.

use crate::types::{Inventory, Quantity};
use std::fmt;
use tracing::warn;

/// An item flagged by the low-stock report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LowStockItem<'a> {
    pub name: &'a str,
    pub quantity: Quantity,
}

/// Items below the threshold, in iteration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockReport<'a> {
    threshold: Quantity,
    items: Vec<LowStockItem<'a>>,
}

impl<'a> LowStockReport<'a> {
    pub fn threshold(&self) -> Quantity {
        self.threshold
    }

    pub fn items(&self) -> &[LowStockItem<'a>] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Collect items with quantity strictly below `threshold`
///
/// Logs a low-stock warning for each item found.
pub fn low_stock(inventory: &Inventory, threshold: Quantity) -> LowStockReport<'_> {
    let items = inventory
        .iter()
        .filter(|(_, record)| record.quantity < threshold)
        .map(|(name, record)| {
            warn!(
                "Low stock alert for {} (Quantity: {})",
                name, record.quantity
            );
            LowStockItem {
                name: name.as_str(),
                quantity: record.quantity,
            }
        })
        .collect();

    LowStockReport { threshold, items }
}

impl fmt::Display for LowStockReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return write!(f, "No low-stock items found.");
        }

        write!(f, "Low Stock Items:")?;
        for item in &self.items {
            write!(
                f,
                "\n{}: Quantity = {}, Threshold = {}",
                item.name, item.quantity, self.threshold
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::MemorySink;
    use crate::types::InventoryRecord;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn inventory_of(quantities: &[(&str, Quantity)]) -> Inventory {
        quantities
            .iter()
            .map(|(name, quantity)| {
                (name.to_string(), InventoryRecord::new(*quantity, Decimal::ONE))
            })
            .collect()
    }

    #[test]
    fn test_threshold_is_strict() {
        let inventory = inventory_of(&[("A", 3), ("B", 10), ("C", 5)]);

        let report = low_stock(&inventory, 5);

        assert_eq!(
            report.items(),
            &[LowStockItem {
                name: "A",
                quantity: 3
            }]
        );
    }

    #[rstest]
    #[case::zero_threshold(0, 0)]
    #[case::threshold_one(1, 1)]
    #[case::default_threshold(5, 2)]
    #[case::high_threshold(100, 4)]
    fn test_threshold_is_a_parameter(#[case] threshold: Quantity, #[case] expected: usize) {
        let inventory = inventory_of(&[("A", 0), ("B", 4), ("C", 5), ("D", 99)]);

        assert_eq!(low_stock(&inventory, threshold).items().len(), expected);
    }

    #[test]
    fn test_report_renders_lines() {
        let inventory = inventory_of(&[("Bolt", 2), ("Nut", 1), ("Washer", 50)]);

        let report = low_stock(&inventory, 5);

        assert_eq!(report.threshold(), 5);
        assert_eq!(
            report.to_string(),
            "Low Stock Items:\n\
             Bolt: Quantity = 2, Threshold = 5\n\
             Nut: Quantity = 1, Threshold = 5"
        );
    }

    #[test]
    fn test_no_low_items_renders_single_line() {
        let inventory = inventory_of(&[("Washer", 50)]);

        let report = low_stock(&inventory, 5);

        assert!(report.is_empty());
        assert_eq!(report.to_string(), "No low-stock items found.");
    }

    #[test]
    fn test_each_low_item_logs_a_warning() {
        let inventory = inventory_of(&[("Bolt", 2), ("Nut", 1), ("Washer", 50)]);
        let sink = MemorySink::new();

        sink.capture(|| low_stock(&inventory, 5));

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.contains("WARN")));
        assert!(lines[0].ends_with("Low stock alert for Bolt (Quantity: 2)"));
        assert!(lines[1].ends_with("Low stock alert for Nut (Quantity: 1)"));
    }
}
