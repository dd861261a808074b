//! Command handlers.
//!
//! Handlers are thin wrappers: read CLI input, call the service, format
//! output for the terminal.

pub mod paths;
pub mod serve;
pub mod summarize;
