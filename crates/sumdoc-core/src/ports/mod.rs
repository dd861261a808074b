//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No process, HTTP or document-format types in any signature
//! - The text generator is prompt in, raw text out; nothing else leaks
//! - The document store owns naming and the output directory

pub mod document_store;
pub mod text_generator;

use std::time::Duration;

use thiserror::Error;

use crate::parsing::ParseError;

pub use document_store::DocumentStore;
pub use text_generator::TextGenerator;

/// Errors raised by a [`TextGenerator`] backend.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The backend process could not be started.
    #[error("Failed to start model process: {0}")]
    Spawn(String),

    /// The backend exited with a failure status.
    #[error("Model process failed ({status}): {stderr}")]
    Failed { status: String, stderr: String },

    /// The backend did not finish within the configured time.
    #[error("Model process timed out after {0:?}")]
    TimedOut(Duration),

    /// The backend configuration is unusable.
    #[error("Invalid model configuration: {0}")]
    Configuration(String),
}

/// Errors raised by a [`DocumentStore`].
#[derive(Debug, Error)]
pub enum StorageError {
    /// The requested document does not exist.
    #[error("File not found: {0}")]
    NotFound(String),

    /// The document could not be rendered.
    #[error("Failed to render document: {0}")]
    Render(String),

    /// Filesystem failure (disk full, permission denied, ...).
    #[error("Storage error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<crate::paths::PathError> for StorageError {
    fn from(err: crate::paths::PathError) -> Self {
        Self::Io(err.to_string())
    }
}

/// Core error type for the summarize pipeline.
///
/// Adapters map this to their own error types (HTTP status codes, CLI exit
/// codes).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Model invocation failed.
    #[error("Model invocation failed: {0}")]
    Generation(#[from] GenerationError),

    /// The model reply could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Writing or reading a document failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Invalid input.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// True when the error means "no such document".
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Storage(StorageError::NotFound(_)))
    }
}
