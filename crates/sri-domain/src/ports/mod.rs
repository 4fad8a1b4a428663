//! Interop Port Interfaces
//!
//! Defines the boundary contracts between service providers (export side)
//! and service registries (import side). Ports follow the Dependency
//! Inversion Principle: this crate defines the interfaces, concrete
//! containers and provider implementations live in external layers.
//!
//! ## Organization
//!
//! - **container** - Read-side lookup capability over resolved entries
//! - **provider** - Export-side contract, covering both export styles
//! - **registry** - Import-side contract accumulating resolver bindings

/// Read-side lookup capability port
pub mod container;
/// Export-side provider ports
pub mod provider;
/// Import-side registry port
pub mod registry;

// Re-export commonly used port traits for convenience
pub use container::ServiceContainer;
pub use provider::{Export, PullExport, PushExport, ServiceProvider};
pub use registry::{Resolver, ServiceRegistry, ServiceRegistryExt};
