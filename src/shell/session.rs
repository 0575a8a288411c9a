//! Interactive inventory session
//!
//! A session loads the inventory once, runs the numbered menu against an
//! input and output stream, and saves when the user picks Save & Exit or the
//! input ends.
//!
//! # Error Handling
//!
//! Nothing the user types can end the loop early. Store rejections and bad
//! numbers are printed and the menu is shown again. A corrupt or unreadable
//! data file is logged and the session starts empty. Only failures writing to
//! the output stream are returned to the caller.

use crate::core::{InventoryStore, Persistence};
use crate::report::{list_all, low_stock};
use crate::shell::menu::{parse_price, parse_quantity, prompt, MenuChoice, MENU};
use crate::types::{InventoryError, Quantity};
use std::io::{self, BufRead, Write};

/// Whether the menu loop keeps going after a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// One run of the interactive shell over a persistence backend
#[derive(Debug)]
pub struct Session<P: Persistence> {
    store: InventoryStore,
    persistence: P,
    low_stock_threshold: Quantity,
}

impl<P: Persistence> Session<P> {
    /// Load the inventory from `persistence` and start a session
    ///
    /// Load failures have already been logged by the backend; the session
    /// then starts with an empty inventory.
    pub fn open(persistence: P, low_stock_threshold: Quantity) -> Self {
        let inventory = persistence
            .load()
            .map(|outcome| outcome.into_inventory())
            .unwrap_or_default();

        Session {
            store: InventoryStore::from_inventory(inventory),
            persistence,
            low_stock_threshold,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut InventoryStore {
        &mut self.store
    }

    /// Persist the current inventory
    pub fn save(&self) -> Result<(), InventoryError> {
        self.persistence.save(self.store.inventory())
    }

    /// Run the menu loop until Save & Exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            writeln!(output, "{}", MENU)?;

            let Some(line) = prompt(&mut input, &mut output, "Enter choice: ")? else {
                writeln!(output)?;
                return self.save_and_exit(&mut output);
            };

            let flow = match line.parse::<MenuChoice>() {
                Ok(choice) => self.handle(choice, &mut input, &mut output)?,
                Err(_) => {
                    writeln!(output, "Invalid choice, try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Carry out a single menu choice, prompting for its arguments
    pub fn handle<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        match choice {
            MenuChoice::AddItem => self.add_item(input, output),
            MenuChoice::RemoveItem => self.remove_item(input, output),
            MenuChoice::ViewQuantity => {
                let Some(name) = prompt(input, output, "Enter item name: ")? else {
                    return self.end_of_input(output);
                };
                writeln!(
                    output,
                    "Quantity of {}: {}",
                    name,
                    self.store.get_quantity(&name)
                )?;
                Ok(Flow::Continue)
            }
            MenuChoice::ViewAll => {
                writeln!(output, "{}", list_all(self.store.inventory()))?;
                Ok(Flow::Continue)
            }
            MenuChoice::CheckLowStock => {
                let report = low_stock(self.store.inventory(), self.low_stock_threshold);
                writeln!(output, "{}", report)?;
                Ok(Flow::Continue)
            }
            MenuChoice::SaveAndExit => {
                self.save_and_exit(output)?;
                Ok(Flow::Exit)
            }
        }
    }

    fn add_item<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let Some(name) = prompt(input, output, "Enter item name: ")? else {
            return self.end_of_input(output);
        };
        let Some(quantity) = prompt(input, output, "Enter quantity: ")? else {
            return self.end_of_input(output);
        };
        let quantity = match parse_quantity(&quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(price) = prompt(input, output, "Enter price: ")? else {
            return self.end_of_input(output);
        };
        let price = match parse_price(&price) {
            Ok(price) => price,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        if let Err(e) = self.store.add(&name, quantity, price) {
            writeln!(output, "{}", e)?;
        }
        Ok(Flow::Continue)
    }

    fn remove_item<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<Flow> {
        let Some(name) = prompt(input, output, "Enter item name: ")? else {
            return self.end_of_input(output);
        };
        let Some(quantity) = prompt(input, output, "Enter quantity to remove: ")? else {
            return self.end_of_input(output);
        };
        let quantity = match parse_quantity(&quantity) {
            Ok(quantity) => quantity,
            Err(e) => {
                writeln!(output, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        if let Err(e) = self.store.remove(&name, quantity) {
            writeln!(output, "{}", e)?;
        }
        Ok(Flow::Continue)
    }

    fn end_of_input<W: Write>(&self, output: &mut W) -> io::Result<Flow> {
        writeln!(output)?;
        self.save_and_exit(output)?;
        Ok(Flow::Exit)
    }

    fn save_and_exit<W: Write>(&self, output: &mut W) -> io::Result<()> {
        match self.save() {
            Ok(()) => writeln!(output, "Data saved. Exiting program."),
            Err(e) => writeln!(output, "Failed to save data: {}", e),
        }
    }
}
