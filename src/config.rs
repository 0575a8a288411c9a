//! Runtime configuration
//!
//! Settings that were once process-wide constants (data file, log file,
//! low-stock threshold) live here and are handed to the components that need
//! them at construction.

use std::path::PathBuf;

use crate::types::Quantity;

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "inventory_data.json";

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "inventory.log";

/// Items with stock strictly below this are reported as low
pub const DEFAULT_LOW_STOCK_THRESHOLD: Quantity = 5;

/// Default tracing filter directive
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Where log events are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    /// Append to the given file, creating it if needed
    File(PathBuf),
    /// Write to standard error
    Stderr,
}

/// Configuration for a single inventory session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryConfig {
    /// JSON file holding the persisted inventory
    pub data_file: PathBuf,

    /// Destination of the log stream
    pub log_sink: LogSink,

    /// Tracing filter directive, e.g. `info` or `warn`
    pub log_level: String,

    /// Threshold used by the low-stock report
    pub low_stock_threshold: Quantity,
}

impl Default for InventoryConfig {
    /// `inventory_data.json`, appending logs to `inventory.log` at `info`,
    /// threshold 5
    fn default() -> Self {
        InventoryConfig {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_sink: LogSink::File(PathBuf::from(DEFAULT_LOG_FILE)),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Default configuration storing data at `data_file`
    pub fn with_data_file(data_file: impl Into<PathBuf>) -> Self {
        InventoryConfig {
            data_file: data_file.into(),
            ..Self::default()
        }
    }
}
