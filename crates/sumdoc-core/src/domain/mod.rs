//! Domain types shared by every sumdoc layer.
//!
//! These types are plain data. They carry no process, HTTP or file-format
//! details so adapters can map them freely.

mod document;
mod summary;

pub use document::{StoredDocument, SummaryOutcome};
pub use summary::{ModelResponse, ParseConfidence, ParsedResult, SummaryRequest};
