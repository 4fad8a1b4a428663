//! Service Container Port
//!
//! The read-side lookup capability: given an identifier, produce the
//! resolved entry value. A container backs the pull export style (see
//! [`PullExport`](crate::ports::provider::PullExport)) and is also the
//! consumer-facing query surface of any concrete registry engine.

use crate::error::Result;
use crate::value_objects::{ServiceId, ServiceValue};

/// Lookup capability over a set of named entries
///
/// A conforming container answers [`get`](Self::get) for every identifier
/// it advertises and fails with an unknown-identifier error for any other.
/// Calls must be repeatable: once an identifier resolves to a value, every
/// later call for that identifier returns the same shared value.
pub trait ServiceContainer: Send + Sync {
    /// Resolve the entry bound to `id`
    ///
    /// # Arguments
    /// * `id` - Identifier of the entry to resolve
    ///
    /// # Returns
    /// The resolved value, shared with every other consumer of `id`
    fn get(&self, id: &ServiceId) -> Result<ServiceValue>;

    /// Check whether `id` is answerable by this container
    ///
    /// Must be side-effect-free: probing an identifier does not resolve it.
    fn has(&self, id: &ServiceId) -> bool;
}
