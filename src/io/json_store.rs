//! JSON file persistence
//!
//! Stores the whole inventory in a single JSON file. Delegates format
//! concerns to the json_format module.
//!
//! # Design
//!
//! The file is read once when a session starts and rewritten in full on
//! save. Writes go to a sibling `.tmp` file which is then renamed over the
//! target, so an interrupted save never leaves a half-written data file.
//!
//! # Error Handling
//!
//! - A missing file is not an error: the session starts empty
//! - Unreadable or corrupt files are logged and returned as errors
//! - Failed saves are logged and returned; the in-memory state is untouched

use crate::core::Persistence;
use crate::io::json_format::{decode_inventory, encode_inventory};
use crate::types::{Inventory, InventoryError, LoadOutcome};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Inventory persisted as a JSON file on local disk
///
/// # Examples
///
/// ```no_run
/// use inventory_tracker::core::Persistence;
/// use inventory_tracker::io::JsonFileStore;
///
/// let store = JsonFileStore::new("inventory_data.json");
/// let inventory = store.load().map(|outcome| outcome.into_inventory()).unwrap_or_default();
/// store.save(&inventory).expect("save failed");
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the file at `path`
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    /// The data file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn write_atomically(&self, contents: &[u8]) -> Result<(), InventoryError> {
        let temp_path = self.temp_path();

        fs::write(&temp_path, contents).map_err(|e| InventoryError::io(&temp_path, &e))?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(InventoryError::io(&self.path, &e));
        }

        Ok(())
    }
}

impl Persistence for JsonFileStore {
    fn load(&self) -> Result<LoadOutcome, InventoryError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("No existing data file found at {}", self.path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(e) => {
                let err = InventoryError::io(&self.path, &e);
                error!("Error loading data from {}: {}", self.path.display(), err);
                return Err(err);
            }
        };

        decode_inventory(&contents, &self.path)
            .map(LoadOutcome::Loaded)
            .inspect_err(|err| {
                error!("Error loading data from {}: {}", self.path.display(), err);
            })
    }

    fn save(&self, inventory: &Inventory) -> Result<(), InventoryError> {
        encode_inventory(inventory)
            .and_then(|encoded| self.write_atomically(&encoded))
            .inspect_err(|err| error!("Error saving inventory data: {}", err))?;

        info!(
            "Inventory data saved successfully to {}",
            self.path.display()
        );
        Ok(())
    }
}
