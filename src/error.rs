//! Error types for the Aqua operator
//!
//! Errors are structured with fields to aid debugging in production.
//! Each error variant includes contextual information like the composite
//! resource name and the field path that was found invalid.

use thiserror::Error;

/// Default context value when no specific context is available
pub const UNKNOWN_CONTEXT: &str = "unknown";

/// Main error type for Aqua operator operations
#[derive(Debug, Error)]
pub enum Error {
    /// Validation error for CRD specs
    #[error("validation error for {resource}: {message}")]
    Validation {
        /// Name of the composite resource with invalid configuration
        resource: String,
        /// Description of what's invalid
        message: String,
        /// The invalid field path (e.g., "metadata.namespace")
        field: Option<String>,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {message}")]
    Serialization {
        /// Description of what failed
        message: String,
        /// The resource kind being serialized (if known)
        kind: Option<String>,
    },

    /// Internal/operational error
    #[error("internal error [{context}]: {message}")]
    Internal {
        /// Description of what failed
        message: String,
        /// Context where the error occurred (e.g., "derivation")
        context: String,
    },
}

impl Error {
    /// Create a validation error with the given message
    ///
    /// For simple validation errors without resource context.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            resource: UNKNOWN_CONTEXT.to_string(),
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error with resource context
    pub fn validation_for(resource: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: msg.into(),
            field: None,
        }
    }

    /// Create a validation error with resource context and field path
    pub fn validation_for_field(
        resource: impl Into<String>,
        field: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a serialization error with the given message
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: None,
        }
    }

    /// Create a serialization error with resource kind context
    pub fn serialization_for_kind(kind: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Serialization {
            message: msg.into(),
            kind: Some(kind.into()),
        }
    }

    /// Create an internal error with the given message
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal {
            message: msg.into(),
            context: UNKNOWN_CONTEXT.to_string(),
        }
    }

    /// Create an internal error with context
    pub fn internal_with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Internal {
            message: msg.into(),
            context: context.into(),
        }
    }

    /// Check if this error is retryable
    ///
    /// Validation and serialization errors are not retryable (require a
    /// config fix); internal errors may clear up on a later reconcile.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Validation { .. } => false,
            Error::Serialization { .. } => false,
            Error::Internal { .. } => true,
        }
    }

    /// Get the composite resource name if this error is associated with one
    pub fn resource(&self) -> Option<&str> {
        match self {
            Error::Validation { resource, .. } => Some(resource),
            Error::Serialization { .. } => None,
            Error::Internal { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Story: derivation refuses composites with missing identity fields
    ///
    /// When a composite resource reaches the derivation layer without a name
    /// or namespace, the error names the offending field instead of
    /// producing a half-populated child.
    #[test]
    fn story_validation_names_the_invalid_field() {
        let err = Error::validation_for_field("demo", "metadata.namespace", "namespace required");
        assert!(err.to_string().contains("demo"));
        assert!(err.to_string().contains("namespace required"));
        match &err {
            Error::Validation { field, .. } => {
                assert_eq!(field.as_deref(), Some("metadata.namespace"));
            }
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn validation_without_context_uses_unknown() {
        let err = Error::validation("name required");
        match &err {
            Error::Validation {
                resource, field, ..
            } => {
                assert_eq!(resource, UNKNOWN_CONTEXT);
                assert!(field.is_none());
            }
            _ => panic!("Expected Validation variant"),
        }
    }

    #[test]
    fn validation_errors_are_not_retryable() {
        assert!(!Error::validation("bad config").is_retryable());
        assert!(!Error::serialization("parse error").is_retryable());
        assert!(Error::internal("transient state").is_retryable());
    }

    #[test]
    fn resource_accessor_returns_name_when_available() {
        assert_eq!(
            Error::validation_for("my-lightning", "msg").resource(),
            Some("my-lightning")
        );
        assert_eq!(Error::serialization("msg").resource(), None);
    }

    #[test]
    fn serialization_error_carries_kind() {
        let err = Error::serialization_for_kind("AquaKubeEnforcer", "missing field 'spec'");
        match &err {
            Error::Serialization { kind, .. } => {
                assert_eq!(kind.as_deref(), Some("AquaKubeEnforcer"));
            }
            _ => panic!("Expected Serialization variant"),
        }
    }

    #[test]
    fn internal_error_includes_context_in_message() {
        let err = Error::internal_with_context("derivation", "unexpected state");
        assert!(err.to_string().contains("[derivation]"));
        assert!(err.to_string().contains("unexpected state"));
    }
}
