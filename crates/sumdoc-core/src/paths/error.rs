//! Output directory errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PathError {
    #[error("Output path {0} exists but is not a directory")]
    NotADirectory(PathBuf),

    #[error("Cannot create output directory {path}: {reason}")]
    CreateFailed { path: PathBuf, reason: String },

    #[error("Output directory {path} is not writable: {reason}")]
    NotWritable { path: PathBuf, reason: String },

    /// `--output-dir ""` or a blank environment value.
    #[error("Output directory path is empty")]
    EmptyPath,
}
