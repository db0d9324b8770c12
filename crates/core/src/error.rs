//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Raised when an entity cannot be constructed at all. Field-level updates on an
/// existing entity never produce a `DomainError`; they report a [`Rejection`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Outcome of a setter or adjustor on an existing entity.
///
/// `Ok(())` means the new value was committed. On `Err` the previous value is
/// always retained.
pub type Outcome = Result<(), Rejection>;

/// Why a setter or adjustor left the entity untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The new value breaks a field constraint (negative quantity, non-positive
    /// price, negative balance, empty name).
    #[error("rejected: {0}")]
    Invalid(&'static str),

    /// The new value equals the current one. Not an error in business terms.
    #[error("value unchanged")]
    Unchanged,

    /// A stock decrease asked for more than is on hand.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: i64, available: i64 },

    /// The result would not fit the field's integer range.
    #[error("arithmetic overflow")]
    Overflow,
}

impl Rejection {
    /// `true` when the rejection only means "nothing to do".
    pub fn is_no_op(&self) -> bool {
        matches!(self, Rejection::Unchanged)
    }
}

/// Commit `new` into `slot` when it differs from the current value.
pub fn replace_if_changed<T: PartialEq>(slot: &mut T, new: T) -> Outcome {
    if *slot == new {
        return Err(Rejection::Unchanged);
    }
    *slot = new;
    Ok(())
}
