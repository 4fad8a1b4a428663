//! Service Registry Port
//!
//! The import side of the interop boundary. A registry accumulates
//! identifier-to-resolver bindings from any number of providers and
//! guarantees at-most-once, on-demand resolution per identifier thereafter.

use crate::error::Result;
use crate::ports::provider::ServiceProvider;
use crate::value_objects::{ServiceId, ServiceValue};

/// A deferred, zero-argument computation producing an entry's value
///
/// Ownership transfers to the registry upon registration; the registry
/// alone controls the invocation count, which is at most one across the
/// registry's lifetime.
pub type Resolver = Box<dyn FnOnce() -> Result<ServiceValue> + Send>;

/// Accumulator of named resolver bindings
///
/// A registry's lifecycle is: created empty, populated during a setup phase
/// via [`register`](Self::register) and
/// [`register_provider`](Self::register_provider), then queried for resolved
/// values. Registration is append-only: there is no API to remove or
/// overwrite a binding, and rebinding an identifier is rejected.
pub trait ServiceRegistry: Send + Sync {
    /// Bind a resolver to `id`
    ///
    /// The resolver is stored, not invoked; resolution happens on first
    /// demand through the registry's read path.
    ///
    /// # Errors
    /// [`Error::DuplicateIdentifier`](crate::Error::DuplicateIdentifier) if
    /// `id` is already bound; the existing binding is left intact.
    fn register(&self, id: ServiceId, resolver: Resolver) -> Result<()>;

    /// Import every entry published by `provider`
    ///
    /// Accepts either export style. The provider must be fully populated
    /// before this call: the identifier set observed here is final, and the
    /// registry never polls the provider again for new identifiers.
    ///
    /// # Errors
    /// Fails like [`register`](Self::register) if any imported identifier
    /// is already bound; bindings imported before the collision remain.
    fn register_provider(&self, provider: &dyn ServiceProvider) -> Result<()>;
}

/// Convenience registration helpers layered over [`ServiceRegistry`]
///
/// Blanket-implemented for every registry; wraps plain closures and
/// ready-made values into [`Resolver`] bindings.
pub trait ServiceRegistryExt: ServiceRegistry {
    /// Bind a closure returning the entry value
    fn register_fn<T, F>(&self, id: impl Into<ServiceId>, f: F) -> Result<()>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        self.register(
            id.into(),
            Box::new(move || f().map(|value| std::sync::Arc::new(value) as ServiceValue)),
        )
    }

    /// Bind an already-constructed value
    ///
    /// The value is still handed out lazily, but no computation runs at
    /// resolution time.
    fn register_value<T>(&self, id: impl Into<ServiceId>, value: T) -> Result<()>
    where
        T: Send + Sync + 'static,
    {
        let shared: ServiceValue = std::sync::Arc::new(value);
        self.register(id.into(), Box::new(move || Ok(shared)))
    }
}

impl<R: ServiceRegistry + ?Sized> ServiceRegistryExt for R {}
