//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Two value objects with the same values are equal.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (a temperature requirement of 10 equals any
///   other temperature requirement of 10)
/// - **Entity**: has identity (two items named `rice` are the same catalog
///   entry, whatever their prices say)
///
/// Value objects are immutable: to "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Temperature(i32);
///
/// impl ValueObject for Temperature {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
