//! Null provider for testing
//!
//! A provider that publishes no entries. Useful for testing import
//! plumbing and for wiring slots where a provider is required but nothing
//! should be contributed.

use sri_domain::ports::{Export, PushExport, ServiceProvider, ServiceRegistry};
use sri_domain::Result;

/// Provider with an empty entry set
///
/// Registration is a no-op: the complete (empty) identifier set is
/// "registered" within the single `register_with` call, satisfying the
/// export contract trivially.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullServiceProvider;

impl NullServiceProvider {
    /// Create a new null provider
    pub fn new() -> Self {
        Self
    }
}

impl PushExport for NullServiceProvider {
    fn register_with(&self, _registry: &dyn ServiceRegistry) -> Result<()> {
        // Nothing to register
        Ok(())
    }
}

impl ServiceProvider for NullServiceProvider {
    fn export(&self) -> Export<'_> {
        Export::Push(self)
    }
}
