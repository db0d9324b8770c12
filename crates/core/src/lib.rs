//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the stock, supplier
//! and delivery crates (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod text;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult, Outcome, Rejection, replace_if_changed};
pub use id::AggregateId;
pub use text::eq_ignore_case;
pub use value_object::ValueObject;
