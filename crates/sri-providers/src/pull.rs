//! Pull-style providers and containers
//!
//! The pull shape exposes two read-only queries: an exhaustive identifier
//! list and a lookup container answering every listed identifier. The
//! importer enumerates the list once and binds a delegating resolver per
//! identifier; nothing is probed eagerly.

use sri_domain::ports::{Export, PullExport, ServiceContainer, ServiceProvider};
use sri_domain::{Error, Result, ServiceId, ServiceValue};
use std::collections::HashMap;
use std::sync::Arc;

/// Eager in-memory lookup container
///
/// Holds already-constructed values keyed by identifier. Useful as the
/// container behind a pull export when the owning side has its entries in
/// hand, and as a test double for any [`ServiceContainer`] consumer.
///
/// # Example
///
/// ```
/// use sri_providers::StaticContainer;
///
/// let provider = StaticContainer::builder()
///     .with("a", 1u32)
///     .with("b", 2u32)
///     .build()
///     .into_provider();
/// ```
pub struct StaticContainer {
    entries: HashMap<ServiceId, ServiceValue>,
}

impl StaticContainer {
    /// Start building a container
    pub fn builder() -> StaticContainerBuilder {
        StaticContainerBuilder {
            entries: HashMap::new(),
        }
    }

    /// The identifiers this container answers
    pub fn identifiers(&self) -> Vec<ServiceId> {
        self.entries.keys().cloned().collect()
    }

    /// Wrap this container into a pull-style provider declaring exactly
    /// the identifiers the container answers
    pub fn into_provider(self) -> ContainerServiceProvider {
        let identifiers = self.identifiers();
        ContainerServiceProvider::new(identifiers, Arc::new(self))
    }
}

impl ServiceContainer for StaticContainer {
    fn get(&self, id: &ServiceId) -> Result<ServiceValue> {
        self.entries
            .get(id)
            .cloned()
            .ok_or_else(|| Error::unknown_identifier(id.clone()))
    }

    fn has(&self, id: &ServiceId) -> bool {
        self.entries.contains_key(id)
    }
}

/// Builder for [`StaticContainer`]
pub struct StaticContainerBuilder {
    entries: HashMap<ServiceId, ServiceValue>,
}

impl StaticContainerBuilder {
    /// Add a value under `id`; a later insert for the same `id` replaces
    /// the earlier one (uniqueness is enforced by the importing registry,
    /// not the container)
    pub fn with<T>(mut self, id: impl Into<ServiceId>, value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        self.entries.insert(id.into(), Arc::new(value));
        self
    }

    /// Finish building
    pub fn build(self) -> StaticContainer {
        StaticContainer {
            entries: self.entries,
        }
    }
}

/// Pull-style provider pairing an identifier list with a container
///
/// The declared list is the interop boundary: a conforming container
/// answers every declared identifier and no other. A mismatch is a
/// provider-author bug that surfaces lazily, at first resolution of the
/// affected identifier.
pub struct ContainerServiceProvider {
    identifiers: Vec<ServiceId>,
    container: Arc<dyn ServiceContainer>,
}

impl ContainerServiceProvider {
    /// Create a provider exporting `identifiers` out of `container`
    pub fn new(identifiers: Vec<ServiceId>, container: Arc<dyn ServiceContainer>) -> Self {
        Self {
            identifiers,
            container,
        }
    }
}

impl PullExport for ContainerServiceProvider {
    fn identifiers(&self) -> Vec<ServiceId> {
        self.identifiers.clone()
    }

    fn container(&self) -> Arc<dyn ServiceContainer> {
        Arc::clone(&self.container)
    }
}

impl ServiceProvider for ContainerServiceProvider {
    fn export(&self) -> Export<'_> {
        Export::Pull(self)
    }
}
