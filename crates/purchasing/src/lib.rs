//! Purchasing domain module (incoming deliveries).
//!
//! A [`Delivery`] records goods arriving for one item. [`reconcile`] books it:
//! the item's stock goes up and the supplier's balance grows by the cost of what
//! arrived, or neither changes.

pub mod delivery;
pub mod fulfillment;

pub use delivery::Delivery;
pub use fulfillment::{DeliveryReconciled, ReconcileError, reconcile};
