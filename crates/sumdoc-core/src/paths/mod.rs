//! Path utilities for the document output directory.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O - adapters handle user prompts separately

mod ensure;
mod error;
mod output;

// Error type
pub use error::PathError;

// Output directory
pub use output::{
    DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, OutputDirResolution, OutputDirSource, resolve_output_dir,
    resolve_output_dir_with,
};

// Directory operations
pub use ensure::{ensure_directory, verify_writable};
