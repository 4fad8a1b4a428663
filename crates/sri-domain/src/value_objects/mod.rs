//! Domain Value Objects
//!
//! Immutable value objects that cross the interop boundary. Value objects
//! are defined by their attributes and can be compared for equality.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ServiceId`] | Unique string key naming one entry within a registry |
//! | [`ServiceValue`] | Shared, dynamically-typed resolved entry value |

/// Service identifier value object
pub mod identifier;

pub use identifier::{ServiceId, ServiceValue};
