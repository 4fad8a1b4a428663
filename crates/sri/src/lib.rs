//! # Service Registry Interop
//!
//! An interoperability contract that lets independently-built
//! dependency-resolution containers exchange named, lazily-computed entries
//! without either side knowing the other's concrete implementation.
//!
//! Two collaborating abstractions make up the contract:
//!
//! - A **provider** owns a finite set of named resolvable entries and
//!   exports them in one of two styles: *push* (it registers deferred
//!   resolvers into a registry handed to it) or *pull* (it exposes its
//!   identifier list and a lookup container for the importer to query).
//! - A **registry** accumulates identifier-to-resolver bindings from any
//!   number of providers and guarantees each identifier resolves to exactly
//!   one value, computed at most once, on first demand. Failures are cached
//!   and replayed the same way values are.
//!
//! ## Example
//!
//! ```
//! use sri::providers::FnServiceProvider;
//! use sri::registry::LazyRegistry;
//! use sri::{ServiceId, ServiceRegistry};
//!
//! let provider = FnServiceProvider::builder()
//!     .with_resolver("greeting", || Ok(String::from("hello")))
//!     .build();
//!
//! let registry = LazyRegistry::new();
//! registry.register_provider(&provider).unwrap();
//!
//! let greeting = registry.get_as::<String>(&ServiceId::new("greeting")).unwrap();
//! assert_eq!(greeting.as_str(), "hello");
//! ```
//!
//! ## Architecture
//!
//! - `domain` - contract types and port traits (identifiers, errors,
//!   provider/registry/container ports)
//! - `registry` - the lazy registry engine implementing the import side
//! - `providers` - ready-made push, pull, and null provider implementations

/// Domain layer - contract types and port traits
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use sri_domain::*;
}

/// Registry engine - lazy at-most-once resolution
///
/// Re-exports from the registry crate for convenience
pub mod registry {
    pub use sri_registry::*;
}

/// Provider implementations - push, pull, and null providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use sri_providers::*;
}

// Re-export commonly used contract types at the crate root
pub use domain::*;

// Re-export the registry engine at the crate root
pub use registry::LazyRegistry;
