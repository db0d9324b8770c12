//! Domain events.
//!
//! Workflows that touch more than one entity describe what they did with an
//! [`Event`] value returned to the caller.

pub mod event;

pub use event::Event;
