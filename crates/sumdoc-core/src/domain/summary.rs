//! Request, raw model reply and parsed result types.

use serde::{Deserialize, Serialize};

/// Text submitted by a user for summarization.
///
/// The text is untrusted and has no length limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
}

impl SummaryRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the text contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Raw standard output of the text-generation backend.
///
/// Unstructured; see [`crate::parsing`] for how it is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelResponse {
    pub raw: String,
}

impl ModelResponse {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }
}

/// Which parser strategy produced a [`ParsedResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseConfidence {
    /// The reply followed the requested `Título:` / `Resumo:` layout.
    Structured,
    /// The reply was split on its first line break.
    Heuristic,
}

impl ParseConfidence {
    pub const fn is_low(self) -> bool {
        matches!(self, Self::Heuristic)
    }
}

/// Title and summary extracted from a model reply.
///
/// Both fields are non-empty; the parser rejects replies that would leave
/// either one blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResult {
    pub title: String,
    pub summary: String,
    pub confidence: ParseConfidence,
}
