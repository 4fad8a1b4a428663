//! # Service Registry Interop - Provider Implementations
//!
//! Ready-made implementations of the export side of the interop contract:
//!
//! - [`FnServiceProvider`] - push-style provider built from closures
//! - [`StaticContainer`] / [`ContainerServiceProvider`] - pull-style export
//!   of an eager lookup container
//! - [`NullServiceProvider`] - provider with no entries, for testing
//!
//! All of them are plain data plus the port traits from `sri-domain`; any
//! registry implementing the import side can consume them.

/// Null provider for testing
pub mod null;
/// Pull-style providers and containers
pub mod pull;
/// Push-style closure-backed provider
pub mod push;

pub use null::NullServiceProvider;
pub use pull::{ContainerServiceProvider, StaticContainer, StaticContainerBuilder};
pub use push::{FnServiceProvider, FnServiceProviderBuilder};
