//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**. They are defined entirely by their
//! attribute values, so two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A ticket request
/// for two adults is the same thing wherever it appears; there is nothing to
/// tell two such requests apart.
///
/// To "modify" a value object, build a new one with the new values.
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects show up in logs and test failures
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Seats(u64);
///
/// impl ValueObject for Seats {}
///
/// assert_eq!(Seats(2), Seats(2));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
