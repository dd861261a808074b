//! Filesystem-backed `DocumentStore`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Local;
use sumdoc_core::naming::{is_plain_file_name, random_suffix};
use sumdoc_core::paths::ensure_directory;
use sumdoc_core::ports::{DocumentStore, StorageError};
use sumdoc_core::{ParsedResult, StoredDocument, document_file_name, sanitize_filename};
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use crate::render::render_docx;

/// Attempts at finding an unused file name before giving up.
const MAX_NAME_ATTEMPTS: usize = 3;

/// Stores documents as flat `.docx` files in one directory.
///
/// The directory is shared by every request without locking. Each write
/// uses a fresh timestamped, randomly suffixed name and refuses to replace
/// an existing file.
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the output directory if it is missing.
    pub fn ensure_root(&self) -> Result<(), StorageError> {
        ensure_directory(&self.root)?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn save(&self, parsed: &ParsedResult) -> Result<StoredDocument, StorageError> {
        self.ensure_root()?;
        let bytes = render_docx(&parsed.title, &parsed.summary)?;

        for _ in 0..MAX_NAME_ATTEMPTS {
            let created_at = Local::now();
            let file_name = document_file_name(&parsed.title, &created_at, &random_suffix());
            let path = self.root.join(&file_name);

            match write_new(&path, &bytes).await {
                Ok(()) => {
                    debug!(path = %path.display(), bytes = bytes.len(), "Document saved");
                    return Ok(StoredDocument {
                        file_name,
                        path,
                        title: sanitize_filename(&parsed.title),
                        created_at,
                    });
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    warn!(file_name = %file_name, "Document name already taken, retrying");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(StorageError::Io(format!(
            "no unused file name after {MAX_NAME_ATTEMPTS} attempts"
        )))
    }

    async fn open(&self, file_name: &str) -> Result<Vec<u8>, StorageError> {
        if !is_plain_file_name(file_name) {
            return Err(StorageError::NotFound(file_name.to_string()));
        }

        let path = self.root.join(file_name);
        match tokio::fs::metadata(&path).await {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(StorageError::NotFound(file_name.to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(file_name.to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        Ok(tokio::fs::read(&path).await?)
    }
}

/// Write `bytes` to a file that must not exist yet.
async fn write_new(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;
    file.write_all(bytes).await?;
    file.flush().await
}
