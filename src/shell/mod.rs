//! Interactive shell module
//!
//! The numbered text menu that drives a session:
//! - `menu` - Menu entries, prompts and numeric input parsing
//! - `session` - The menu loop over a store and a persistence backend

pub mod menu;
pub mod session;

pub use menu::MenuChoice;
pub use session::{Flow, Session};
