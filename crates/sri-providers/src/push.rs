//! Push-style closure-backed provider
//!
//! Builds a provider from plain closures. On import the provider walks its
//! entries and registers one deferred resolver per identifier; resolvers
//! stay uninvoked until the consuming registry first demands the entry.

use sri_domain::ports::{Export, PushExport, ServiceProvider, ServiceRegistry};
use sri_domain::{Result, ServiceId, ServiceValue};
use std::sync::Arc;

/// Shareable resolver factory
///
/// Stored as `Fn` rather than `FnOnce` so the same provider can be
/// registered into any number of independent registries; each registry
/// still invokes its own binding at most once.
type SharedResolver = Arc<dyn Fn() -> Result<ServiceValue> + Send + Sync>;

/// Push-style provider built from closures
///
/// # Example
///
/// ```
/// use sri_providers::FnServiceProvider;
///
/// let provider = FnServiceProvider::builder()
///     .with_resolver("config", || Ok(String::from("production")))
///     .with_value("max_connections", 32u32)
///     .build();
/// ```
pub struct FnServiceProvider {
    entries: Vec<(ServiceId, SharedResolver)>,
}

impl FnServiceProvider {
    /// Start building a provider
    pub fn builder() -> FnServiceProviderBuilder {
        FnServiceProviderBuilder {
            entries: Vec::new(),
        }
    }

    /// The identifiers this provider will register
    pub fn identifiers(&self) -> Vec<ServiceId> {
        self.entries.iter().map(|(id, _)| id.clone()).collect()
    }
}

impl PushExport for FnServiceProvider {
    fn register_with(&self, registry: &dyn ServiceRegistry) -> Result<()> {
        tracing::debug!(count = self.entries.len(), "pushing entries into registry");
        for (id, resolver) in &self.entries {
            let resolver = Arc::clone(resolver);
            registry.register(id.clone(), Box::new(move || resolver()))?;
        }
        Ok(())
    }
}

impl ServiceProvider for FnServiceProvider {
    fn export(&self) -> Export<'_> {
        Export::Push(self)
    }
}

/// Builder for [`FnServiceProvider`]
///
/// The entry set is fixed once [`build`](Self::build) is called; a provider
/// never grows after enumeration.
pub struct FnServiceProviderBuilder {
    entries: Vec<(ServiceId, SharedResolver)>,
}

impl FnServiceProviderBuilder {
    /// Add an entry resolved by a closure on first demand
    pub fn with_resolver<T, F>(mut self, id: impl Into<ServiceId>, resolver: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> Result<T> + Send + Sync + 'static,
    {
        let shared: SharedResolver =
            Arc::new(move || resolver().map(|value| Arc::new(value) as ServiceValue));
        self.entries.push((id.into(), shared));
        self
    }

    /// Add an entry backed by an already-constructed value
    pub fn with_value<T>(mut self, id: impl Into<ServiceId>, value: T) -> Self
    where
        T: Send + Sync + 'static,
    {
        let shared_value: ServiceValue = Arc::new(value);
        let shared: SharedResolver = Arc::new(move || Ok(Arc::clone(&shared_value)));
        self.entries.push((id.into(), shared));
        self
    }

    /// Finish building; the identifier set is complete from here on
    pub fn build(self) -> FnServiceProvider {
        FnServiceProvider {
            entries: self.entries,
        }
    }
}
