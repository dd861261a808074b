//! Document store trait definition.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{ParsedResult, StoredDocument};

/// Persistence for generated documents.
///
/// Implementations own the output directory, the file format and naming.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write a new document holding `parsed.title` as heading and
    /// `parsed.summary` as body. Never overwrites an existing document.
    async fn save(&self, parsed: &ParsedResult) -> Result<StoredDocument, StorageError>;

    /// Read back a document by the file name returned from [`save`].
    ///
    /// Returns [`StorageError::NotFound`] when no such document exists.
    ///
    /// [`save`]: DocumentStore::save
    async fn open(&self, file_name: &str) -> Result<Vec<u8>, StorageError>;
}
