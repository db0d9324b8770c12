//! Parties domain module (suppliers).
//!
//! This crate contains business rules for the vendors stock is bought from,
//! implemented purely as in-memory domain logic (no IO, no storage).

pub mod supplier;

pub use supplier::{Supplier, SupplierId};
