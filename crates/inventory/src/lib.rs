//! Inventory domain module.
//!
//! This crate contains business rules for stocked items and the registry that
//! numbers them, implemented purely as in-memory domain logic (no IO, no storage).

pub mod item;
pub mod registry;

pub use item::{Item, ItemId, NewItem};
pub use registry::ItemIdRegistry;
