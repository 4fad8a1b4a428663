//! # Service Registry Interop - Registry Engine
//!
//! Concrete implementation of the import side of the interop contract:
//! [`LazyRegistry`] accumulates identifier-to-resolver bindings from any
//! number of providers and resolves each entry at most once, on first
//! demand, caching the outcome (value or error) for the registry's
//! lifetime.
//!
//! ## Example
//!
//! ```
//! use sri_domain::{ServiceId, ServiceRegistryExt};
//! use sri_registry::LazyRegistry;
//!
//! let registry = LazyRegistry::new();
//! registry.register_fn("greeting", || Ok(String::from("hello"))).unwrap();
//!
//! let greeting = registry.get_as::<String>(&ServiceId::new("greeting")).unwrap();
//! assert_eq!(greeting.as_str(), "hello");
//! ```

mod entry;
/// Lazy registry implementation
pub mod registry;

pub use registry::LazyRegistry;
