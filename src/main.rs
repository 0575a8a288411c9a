//! Inventory Tracker CLI
//!
//! Interactive command-line inventory manager.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! cargo run -- --data-file stock.json --threshold 10
//! cargo run -- --no-log-file --log-level warn < commands.txt
//! ```
//!
//! The program loads the inventory from the data file, shows a numbered menu
//! on stdout and reads choices from stdin. Choosing "Save & Exit" (or closing
//! stdin) writes the inventory back to the data file.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (log file cannot be opened, terminal I/O failed)

use inventory_tracker::cli;
use inventory_tracker::io::JsonFileStore;
use inventory_tracker::logging;
use inventory_tracker::shell::Session;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_config();

    if let Err(e) = logging::init(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    let persistence = JsonFileStore::new(&config.data_file);
    let mut session = Session::open(persistence, config.low_stock_threshold);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    if let Err(e) = session.run(stdin.lock(), stdout.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
