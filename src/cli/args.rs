use crate::config::{
    InventoryConfig, LogSink, DEFAULT_DATA_FILE, DEFAULT_LOG_FILE, DEFAULT_LOG_LEVEL,
    DEFAULT_LOW_STOCK_THRESHOLD,
};
use crate::types::Quantity;
use clap::Parser;
use std::path::PathBuf;

/// Track inventory stock and prices from an interactive menu
#[derive(Parser, Debug)]
#[command(name = "inventory-tracker")]
#[command(about = "Track inventory stock and prices from an interactive menu", long_about = None)]
pub struct CliArgs {
    /// JSON file the inventory is loaded from and saved to
    #[arg(
        long = "data-file",
        value_name = "PATH",
        default_value = DEFAULT_DATA_FILE,
        help = "Path to the inventory data file"
    )]
    pub data_file: PathBuf,

    /// File log events are appended to
    #[arg(
        long = "log-file",
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Path to the log file (appended to)"
    )]
    pub log_file: PathBuf,

    /// Send log events to stderr instead of the log file
    #[arg(long = "no-log-file", help = "Write log events to stderr instead of a file")]
    pub no_log_file: bool,

    /// Items with stock strictly below this are reported as low
    #[arg(
        long = "threshold",
        value_name = "COUNT",
        default_value_t = DEFAULT_LOW_STOCK_THRESHOLD,
        help = "Low-stock threshold (default: 5)"
    )]
    pub threshold: Quantity,

    /// Tracing filter directive
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = DEFAULT_LOG_LEVEL,
        help = "Log level filter, e.g. 'info' or 'warn'"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Build the session configuration from the parsed arguments
    pub fn to_config(&self) -> InventoryConfig {
        let log_sink = if self.no_log_file {
            LogSink::Stderr
        } else {
            LogSink::File(self.log_file.clone())
        };

        InventoryConfig {
            data_file: self.data_file.clone(),
            log_sink,
            log_level: self.log_level.clone(),
            low_stock_threshold: self.threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_match_config_defaults() {
        let parsed = CliArgs::try_parse_from(["program"]).unwrap();
        assert_eq!(parsed.to_config(), InventoryConfig::default());
    }

    #[rstest]
    #[case::data_file(&["program", "--data-file", "stock.json"], "stock.json", 5)]
    #[case::threshold(&["program", "--threshold", "10"], DEFAULT_DATA_FILE, 10)]
    #[case::all_options(
        &["program", "--data-file", "/tmp/stock.json", "--threshold", "0"],
        "/tmp/stock.json",
        0
    )]
    fn test_config_options(
        #[case] args: &[&str],
        #[case] data_file: &str,
        #[case] threshold: Quantity,
    ) {
        let config = CliArgs::try_parse_from(args).unwrap().to_config();

        assert_eq!(config.data_file, PathBuf::from(data_file));
        assert_eq!(config.low_stock_threshold, threshold);
    }

    #[rstest]
    #[case::log_file(
        &["program", "--log-file", "audit.log"],
        LogSink::File(PathBuf::from("audit.log"))
    )]
    #[case::stderr(&["program", "--no-log-file"], LogSink::Stderr)]
    #[case::stderr_wins(&["program", "--log-file", "audit.log", "--no-log-file"], LogSink::Stderr)]
    fn test_log_sink_selection(#[case] args: &[&str], #[case] expected: LogSink) {
        let config = CliArgs::try_parse_from(args).unwrap().to_config();
        assert_eq!(config.log_sink, expected);
    }

    #[test]
    fn test_log_level_option() {
        let config = CliArgs::try_parse_from(["program", "--log-level", "warn"])
            .unwrap()
            .to_config();
        assert_eq!(config.log_level, "warn");
    }

    // Error handling tests
    #[rstest]
    #[case::negative_threshold(&["program", "--threshold", "-1"])]
    #[case::non_numeric_threshold(&["program", "--threshold", "few"])]
    #[case::unexpected_positional(&["program", "extra"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
