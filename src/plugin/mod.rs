//! Plugin goal support.
//!
//! # Modules
//!
//! - [`mojo`] - The [`Mojo`] trait with skip handling
//! - [`session`] - Build session properties

pub mod mojo;
pub mod session;

pub use mojo::{Mojo, MojoExecution};
pub use session::Session;

use thiserror::Error;

use crate::error::SharedError;

/// Error raised by a goal.
#[derive(Debug, Error)]
pub enum MojoError {
    /// An expected problem, such as unmet requirements.
    #[error("{0}")]
    Failure(String),

    /// An unexpected problem while running the goal.
    #[error("{message}")]
    Execution {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl MojoError {
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure(message.into())
    }

    pub fn execution(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Execution {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

impl From<SharedError> for MojoError {
    fn from(err: SharedError) -> Self {
        match err {
            SharedError::RequirementsNotFulfilled { .. } => Self::Failure(err.to_string()),
            other => Self::Execution {
                message: other.to_string(),
                source: Some(Box::new(other)),
            },
        }
    }
}

/// Result type alias for goals.
pub type MojoResult<T> = std::result::Result<T, MojoError>;
