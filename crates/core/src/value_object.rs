//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: stock status,
/// aggregate statistics and sort specifications are values, inventory items
/// are entities.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Money(f64);
///
/// impl ValueObject for Money {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
