//! Service identifier value object

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A resolved entry value
///
/// Entries may be of any type; resolved values are shared between all
/// consumers of an identifier, so they are handed out behind an `Arc`.
pub type ServiceValue = Arc<dyn Any + Send + Sync>;

/// Identifier of one entry within a registry's namespace
///
/// Identifiers are immutable string keys, unique per registry. Two providers
/// registering into the same registry must not claim the same identifier;
/// the registry rejects the second claim rather than overwriting the first.
///
/// # Example
///
/// ```
/// use sri_domain::ServiceId;
///
/// let id = ServiceId::new("database.connection");
/// assert_eq!(id.as_str(), "database.connection");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Create a new service identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// View the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the identifier, yielding the underlying string
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
