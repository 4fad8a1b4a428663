//! Lazy service registry
//!
//! Accumulates resolver bindings from providers and serves as the
//! consumer-facing namespace once setup is complete. Uses `DashMap` for the
//! identifier map, so registration and lookup take `&self`.

use crate::entry::ServiceEntry;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use sri_domain::ports::{
    Export, PullExport, Resolver, ServiceContainer, ServiceProvider, ServiceRegistry,
};
use sri_domain::{Error, Result, ServiceId, ServiceValue};
use std::sync::Arc;

/// Thread-safe accumulator with at-most-once lazy resolution
///
/// Each registry instance is an independent, explicitly-constructed
/// namespace; there is no process-wide singleton. The lifecycle is:
/// created empty, populated via [`register`](ServiceRegistry::register) and
/// [`register_provider`](ServiceRegistry::register_provider) during a setup
/// phase, then queried through [`get`](LazyRegistry::get) or the
/// [`ServiceContainer`] port.
///
/// Resolution is memoized per identifier: the bound resolver runs exactly
/// once across the registry's lifetime, even under concurrent first-time
/// access, and the outcome (value or error) is cached and replayed.
///
/// A registry is itself a pull-style [`ServiceProvider`], so the contents
/// of one registry can be exported wholesale into another.
pub struct LazyRegistry {
    /// Map of bound entries by identifier, shared so the registry can hand
    /// out a live [`ServiceContainer`] view of itself when acting as a
    /// pull-style provider
    entries: Arc<DashMap<ServiceId, Arc<ServiceEntry>>>,
}

impl LazyRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Resolve the entry bound to `id`
    ///
    /// Invokes the bound resolver on first demand and caches the outcome;
    /// every later call for `id` returns the same shared value, or replays
    /// the same error if the first invocation failed.
    ///
    /// # Errors
    /// [`Error::UnknownIdentifier`] if `id` was never bound;
    /// the cached resolver error otherwise.
    pub fn get(&self, id: &ServiceId) -> Result<ServiceValue> {
        // Clone the entry Arc out of the map guard before resolving, so a
        // resolver may itself consult this registry without deadlocking on
        // the map shard.
        let entry = self
            .entries
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| Error::unknown_identifier(id.clone()))?;
        entry.resolve(id)
    }

    /// Resolve the entry bound to `id` and downcast it to `T`
    ///
    /// # Errors
    /// Fails like [`get`](Self::get), or with [`Error::TypeMismatch`] when
    /// the resolved value is not a `T`.
    pub fn get_as<T: Send + Sync + 'static>(&self, id: &ServiceId) -> Result<Arc<T>> {
        self.get(id)?
            .downcast::<T>()
            .map_err(|_| Error::type_mismatch(id.clone(), std::any::type_name::<T>()))
    }

    /// Check whether `id` is bound in this registry
    pub fn is_registered(&self, id: &ServiceId) -> bool {
        self.entries.contains_key(id)
    }

    /// Check whether the entry bound to `id` has already been resolved
    ///
    /// Side-effect-free: probing never triggers resolution.
    pub fn is_resolved(&self, id: &ServiceId) -> bool {
        self.entries
            .get(id)
            .is_some_and(|entry| entry.is_settled())
    }

    /// List all bound identifiers
    pub fn identifiers(&self) -> Vec<ServiceId> {
        self.entries.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of bound identifiers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identifiers are bound
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LazyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry for LazyRegistry {
    fn register(&self, id: ServiceId, resolver: Resolver) -> Result<()> {
        // Entry API makes the duplicate check and the insert atomic, so a
        // concurrent double-claim is rejected rather than raced.
        match self.entries.entry(id) {
            Entry::Occupied(occupied) => Err(Error::duplicate_identifier(occupied.key().clone())),
            Entry::Vacant(vacant) => {
                tracing::debug!(id = %vacant.key(), "registered resolver");
                vacant.insert(Arc::new(ServiceEntry::new(resolver)));
                Ok(())
            }
        }
    }

    fn register_provider(&self, provider: &dyn ServiceProvider) -> Result<()> {
        match provider.export() {
            Export::Push(push) => {
                tracing::debug!(style = "push", "importing provider");
                push.register_with(self)
            }
            Export::Pull(pull) => {
                let container = pull.container();
                let ids = pull.identifiers();
                tracing::debug!(style = "pull", count = ids.len(), "importing provider");
                // The identifier list observed here is final; each entry
                // defers to the provider's container on first demand.
                for id in ids {
                    let delegate = Arc::clone(&container);
                    let target = id.clone();
                    self.register(id, Box::new(move || delegate.get(&target)))?;
                }
                Ok(())
            }
        }
    }
}

impl ServiceContainer for LazyRegistry {
    fn get(&self, id: &ServiceId) -> Result<ServiceValue> {
        LazyRegistry::get(self, id)
    }

    fn has(&self, id: &ServiceId) -> bool {
        self.is_registered(id)
    }
}

/// A shared registry exports its own contents, pull-style
///
/// Mirrors the source contract's note that a container implementation may
/// itself act as a provider, exporting its entries to another registry.
impl PullExport for LazyRegistry {
    fn identifiers(&self) -> Vec<ServiceId> {
        LazyRegistry::identifiers(self)
    }

    fn container(&self) -> Arc<dyn ServiceContainer> {
        // A fresh handle over the same shared entry map: lookups through the
        // exported container hit the very entries this registry owns.
        Arc::new(LazyRegistry {
            entries: Arc::clone(&self.entries),
        })
    }
}

impl ServiceProvider for LazyRegistry {
    fn export(&self) -> Export<'_> {
        Export::Pull(self)
    }
}
