//! # Service Registry Interop - Domain Layer
//!
//! Contract types for exchanging lazily-resolved service entries between
//! independently-built containers. A [`ServiceProvider`] owns a finite set of
//! named entries; a [`ServiceRegistry`] accumulates those entries from any
//! number of providers and resolves each one at most once, on first demand.
//!
//! Neither side needs to know the other's concrete implementation: the
//! boundary surface is the small set of port traits defined in [`ports`].
//!
//! ## Organization
//!
//! - [`error`] - Error taxonomy shared across the interop boundary
//! - [`value_objects`] - Identifier and value types crossing the boundary
//! - [`ports`] - Provider, registry, and container port traits

/// Error taxonomy for the interop boundary
pub mod error;
/// Port traits defining the provider/registry boundary
pub mod ports;
/// Value objects crossing the interop boundary
pub mod value_objects;

// Re-export commonly used types at the crate root
pub use error::{Error, Result};
pub use ports::{
    Export, PullExport, PushExport, Resolver, ServiceContainer, ServiceProvider, ServiceRegistry,
    ServiceRegistryExt,
};
pub use value_objects::{ServiceId, ServiceValue};
