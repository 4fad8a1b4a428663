//! Error handling types

use crate::value_objects::ServiceId;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the interop boundary
///
/// All variants carry owned data only, so the type is `Clone`: a registry
/// caches the outcome of a failed resolution and replays the identical error
/// on every subsequent query for that identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An identifier is already bound in the target registry
    #[error("Duplicate identifier: '{id}' is already registered")]
    DuplicateIdentifier {
        /// The identifier that was registered twice
        id: ServiceId,
    },

    /// Resolution was requested for an identifier with no binding
    #[error("Unknown identifier: '{id}' is not registered")]
    UnknownIdentifier {
        /// The identifier that has no binding
        id: ServiceId,
    },

    /// A resolver invocation failed; replayed verbatim on later queries
    #[error("Resolution of '{id}' failed: {message}")]
    ResolutionFailure {
        /// The identifier whose resolver failed
        id: ServiceId,
        /// Description of the underlying failure
        message: String,
    },

    /// A resolved value was requested as a type it does not have
    #[error("Type mismatch for '{id}': expected {expected}")]
    TypeMismatch {
        /// The identifier whose value was queried
        id: ServiceId,
        /// Name of the requested type
        expected: String,
    },

    /// A provider failed while exporting its entries
    #[error("Provider error: {message}")]
    Provider {
        /// Description of the provider failure
        message: String,
    },
}

impl Error {
    /// Create a duplicate identifier error
    pub fn duplicate_identifier(id: impl Into<ServiceId>) -> Self {
        Self::DuplicateIdentifier { id: id.into() }
    }

    /// Create an unknown identifier error
    pub fn unknown_identifier(id: impl Into<ServiceId>) -> Self {
        Self::UnknownIdentifier { id: id.into() }
    }

    /// Create a resolution failure error
    pub fn resolution_failure(id: impl Into<ServiceId>, message: impl Into<String>) -> Self {
        Self::ResolutionFailure {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(id: impl Into<ServiceId>, expected: impl Into<String>) -> Self {
        Self::TypeMismatch {
            id: id.into(),
            expected: expected.into(),
        }
    }

    /// Create a provider error
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }
}
