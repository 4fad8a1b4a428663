//! Service Provider Ports
//!
//! The export side of the interop boundary. A provider declares a fixed,
//! enumerable set of identifier-to-resolution pairs without performing any
//! resolution itself. The source material knows two equivalent shapes:
//!
//! - **Push**: the provider actively registers its bindings into a given
//!   registry ([`PushExport`]).
//! - **Pull**: the provider passively exposes its identifier list and a
//!   lookup container; the importer queries both ([`PullExport`]).
//!
//! Rather than duplicating registry import logic per shape, both are
//! variants of one polymorphic [`ServiceProvider`] capability selected
//! through the [`Export`] tagged union.

use crate::error::Result;
use crate::ports::container::ServiceContainer;
use crate::ports::registry::ServiceRegistry;
use crate::value_objects::ServiceId;
use std::sync::Arc;

/// The export style offered by a provider
///
/// Borrowed view handed out by [`ServiceProvider::export`]; importers match
/// on the variant and drive whichever protocol the provider speaks.
pub enum Export<'a> {
    /// Provider registers its bindings itself when handed a registry
    Push(&'a dyn PushExport),
    /// Provider exposes an identifier list and a lookup container
    Pull(&'a dyn PullExport),
}

/// Push-style export: provider-driven registration
pub trait PushExport: Send + Sync {
    /// Register every entry published by this provider into `registry`
    ///
    /// The complete identifier set must be registered synchronously within
    /// this single call; a provider must not attempt to register additional
    /// identifiers later through any other channel.
    ///
    /// # Errors
    /// Propagates the registry's duplicate-identifier rejection, or a
    /// provider-side failure while enumerating entries.
    fn register_with(&self, registry: &dyn ServiceRegistry) -> Result<()>;
}

/// Pull-style export: importer-driven enumeration and lookup
pub trait PullExport: Send + Sync {
    /// The exhaustive set of identifiers this provider can supply
    ///
    /// Side-effect-free and stable: repeated calls return the same set, and
    /// an importer may treat the list observed in one call as final.
    fn identifiers(&self) -> Vec<ServiceId>;

    /// The lookup container resolving the declared identifiers
    ///
    /// The returned container must answer
    /// [`get`](crate::ports::container::ServiceContainer::get) for every
    /// identifier in [`identifiers`](Self::identifiers) and for no other.
    /// Obtaining the container is side-effect-free and repeatable.
    fn container(&self) -> Arc<dyn ServiceContainer>;
}

/// A source of named, resolvable entries
///
/// Providers are immutable descriptors: the entry set is complete the
/// moment it is enumerated, and how or when entries are eventually used is
/// entirely the importing registry's business.
///
/// # Example
///
/// ```ignore
/// use sri_domain::{Export, ServiceProvider};
///
/// fn import(provider: &dyn ServiceProvider) {
///     match provider.export() {
///         Export::Push(push) => { /* hand it the registry */ }
///         Export::Pull(pull) => { /* enumerate and delegate */ }
///     }
/// }
/// ```
pub trait ServiceProvider: Send + Sync {
    /// The export style this provider speaks
    fn export(&self) -> Export<'_>;
}

/// A shared provider is a provider: delegate through the `Arc`
impl<T: ServiceProvider + ?Sized> ServiceProvider for Arc<T> {
    fn export(&self) -> Export<'_> {
        (**self).export()
    }
}
