//! Entities keep their identity while every other field changes.

/// Something looked up and referred to by id (items, suppliers).
///
/// Two entities with equal ids are the same thing at different points in time,
/// even when their fields disagree.
pub trait Entity {
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
