//! Core domain for sumdoc.
//!
//! Holds everything that does not touch a process, a socket or a file
//! format: the domain types, the prompt template, the model-output parser,
//! file naming, the port traits adapters implement, and the
//! [`SummarizeService`] pipeline that composes them.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod naming;
pub mod parsing;
pub mod paths;
pub mod ports;
pub mod prompt;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    ModelResponse, ParseConfidence, ParsedResult, StoredDocument, SummaryOutcome, SummaryRequest,
};
pub use naming::{DOCUMENT_EXTENSION, document_file_name, sanitize_filename};
pub use parsing::{
    DEFAULT_RESULT_PATTERN, DEFAULT_TITLE_MAX_CHARS, ParseError, ParserConfig, parse_model_output,
};
pub use paths::{
    DEFAULT_OUTPUT_DIR, OUTPUT_DIR_ENV, PathError, ensure_directory, resolve_output_dir,
    verify_writable,
};
pub use ports::{CoreError, DocumentStore, GenerationError, StorageError, TextGenerator};
pub use prompt::{DEFAULT_PROMPT_TEMPLATE, PromptTemplate};
pub use services::SummarizeService;
