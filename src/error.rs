//! Error types for mvn-shared operations.
//!
//! This module defines [`SharedError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - I/O failures are surfaced unchanged via `SharedError::Io`
//! - Precondition violations fail before anything touches the disk
//! - Version parse failures and undiscoverable versions are setup errors,
//!   distinct from a requirement mismatch (which is a normal report)
//! - Use `anyhow::Error` (via `SharedError::Other`) for ad-hoc context

use thiserror::Error;

/// Core error type for mvn-shared operations.
#[derive(Debug, Error)]
pub enum SharedError {
    /// A required argument or path shape was not provided.
    #[error("Precondition failed: {message}")]
    Precondition { message: String },

    /// A version or version range could not be parsed.
    #[error("Invalid version specification '{input}': {message}")]
    InvalidVersionSpecification { input: String, message: String },

    /// The host tool or platform version could not be discovered at all.
    #[error("{component} version could not be determined")]
    VersionUndetermined { component: String },

    /// Runtime requirements were checked and found unsatisfied.
    #[error("Runtime requirements of {name} are not fulfilled")]
    RequirementsNotFulfilled { name: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SharedError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_version(input: &str, message: impl Into<String>) -> Self {
        Self::InvalidVersionSpecification {
            input: input.to_string(),
            message: message.into(),
        }
    }

    /// Whether this error signals a broken environment or malformed input
    /// rather than a runtime failure.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::Precondition { .. }
                | Self::InvalidVersionSpecification { .. }
                | Self::VersionUndetermined { .. }
        )
    }
}

/// Result type alias for mvn-shared operations.
pub type Result<T> = std::result::Result<T, SharedError>;
