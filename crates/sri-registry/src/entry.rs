//! Per-identifier resolution slot

use once_cell::sync::OnceCell;
use sri_domain::{Error, Resolver, Result, ServiceId, ServiceValue};
use std::sync::Mutex;

/// One bound entry inside a registry
///
/// Lifecycle per identifier: bound (resolver stored, not yet invoked), then
/// resolved or failed, terminally. The `OnceCell` synchronizes racing
/// first-time callers so the resolver runs at most once; the cached outcome
/// (value or error) is replayed on every later query.
pub(crate) struct ServiceEntry {
    /// Consumed on first resolution; `None` afterwards
    resolver: Mutex<Option<Resolver>>,
    /// Cached resolution outcome, set exactly once
    outcome: OnceCell<Result<ServiceValue>>,
}

impl ServiceEntry {
    pub(crate) fn new(resolver: Resolver) -> Self {
        Self {
            resolver: Mutex::new(Some(resolver)),
            outcome: OnceCell::new(),
        }
    }

    /// Whether the resolver has already run (successfully or not)
    pub(crate) fn is_settled(&self) -> bool {
        self.outcome.get().is_some()
    }

    /// Resolve this entry, invoking the resolver on first demand only
    ///
    /// Concurrent first-time callers block until the single invocation
    /// completes and then all observe the same cached outcome.
    pub(crate) fn resolve(&self, id: &ServiceId) -> Result<ServiceValue> {
        self.outcome
            .get_or_init(|| {
                tracing::debug!(id = %id, "invoking resolver");
                let resolver = match self.resolver.lock() {
                    Ok(mut slot) => slot.take(),
                    // Poisoned lock: a previous invocation attempt panicked
                    Err(_) => None,
                };
                match resolver {
                    Some(resolve) => resolve(),
                    None => Err(Error::resolution_failure(
                        id.clone(),
                        "resolver unavailable (consumed by a failed invocation)",
                    )),
                }
            })
            .clone()
    }
}
