//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity of their own: two instances with the same
/// attribute values are interchangeable. A delivery record is one; an item is not.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
