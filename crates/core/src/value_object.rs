//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are domain objects that are **immutable** and **compared by value**.
/// They represent concepts where identity doesn't matter - only the values matter.
///
/// Example:
/// - `TaxCode("FR000000")` is a value object
/// - `Shipment { id: ShipmentId(...), ... }` is an entity
///
/// To "modify" a value object, create a new one with the new values. The trait
/// requires `Clone` (values are copied, not referenced), `PartialEq` (compared
/// by attribute values), and `Debug` (loggable, testable).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
