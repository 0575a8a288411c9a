//! Core business logic module
//!
//! This module contains the core inventory components:
//! - `traits` - Trait abstraction for interchangeable persistence backends
//! - `inventory_store` - In-memory inventory and its stock mutations

pub mod inventory_store;
pub mod traits;

pub use inventory_store::InventoryStore;
pub use traits::Persistence;
