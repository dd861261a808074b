//! Stored document metadata.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::ParsedResult;

/// A generated document persisted in the output directory.
///
/// The file name is the only record of the title and creation time; there
/// is no index next to the files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredDocument {
    /// File name relative to the output directory. This is what callers
    /// hand out for downloads.
    pub file_name: String,
    /// Full path on disk.
    pub path: PathBuf,
    /// Sanitized title used as the base of the file name.
    pub title: String,
    pub created_at: DateTime<Local>,
}

/// Result of one run of the summarize pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryOutcome {
    pub parsed: ParsedResult,
    pub document: StoredDocument,
}
