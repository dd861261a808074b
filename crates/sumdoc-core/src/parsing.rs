//! Extraction of a title and a summary from a raw model reply.
//!
//! The backend is asked for a `Título: ...` / `Resumo: ...` reply but is not
//! bound to it, so parsing runs two strategies:
//!
//! 1. **Structured**: search for the requested layout anywhere in the reply
//!    (case-insensitive, summary runs to the end of the text).
//! 2. **Heuristic**: when the layout is absent, split on the first line
//!    break and accept the first line as the title if it is short enough.
//!
//! Anything else is rejected as an unexpected format. Results from the
//! second strategy are tagged [`ParseConfidence::Heuristic`] so callers can
//! tell a near-miss reply from a compliant one.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::domain::{ParseConfidence, ParsedResult};

/// Layout requested from the model: group 1 is the title, group 2 the
/// summary.
pub const DEFAULT_RESULT_PATTERN: &str = r"(?is)Título:\s*(.*?)\s*\nResumo:\s*(.*)";

/// A first line shorter than this many characters is taken as a title by
/// the heuristic strategy.
pub const DEFAULT_TITLE_MAX_CHARS: usize = 50;

static DEFAULT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(DEFAULT_RESULT_PATTERN).expect("default result pattern must compile")
});

/// Errors produced while parsing a model reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Neither strategy applies to the reply.
    #[error("Unexpected output format from the model")]
    UnexpectedFormat,

    /// A strategy matched but left the title or the summary empty.
    #[error("Model output has an empty {0}")]
    EmptyField(&'static str),

    /// A custom result pattern is unusable.
    #[error("Invalid result pattern: {0}")]
    InvalidPattern(String),
}

/// Tunables for [`parse_model_output`].
#[derive(Debug, Clone)]
pub struct ParserConfig {
    pattern: Regex,
    title_max_chars: usize,
}

impl ParserConfig {
    /// Use a custom result pattern.
    ///
    /// The pattern must define at least two capture groups: the title and
    /// the summary, in that order.
    pub fn with_pattern(mut self, pattern: &str) -> Result<Self, ParseError> {
        let regex = Regex::new(pattern).map_err(|e| ParseError::InvalidPattern(e.to_string()))?;
        // captures_len counts the implicit whole-match group.
        if regex.captures_len() < 3 {
            return Err(ParseError::InvalidPattern(format!(
                "expected two capture groups in {pattern:?}"
            )));
        }
        self.pattern = regex;
        Ok(self)
    }

    /// Set the heuristic title threshold (in characters).
    #[must_use]
    pub const fn with_title_max_chars(mut self, max: usize) -> Self {
        self.title_max_chars = max;
        self
    }

    pub const fn title_max_chars(&self) -> usize {
        self.title_max_chars
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.clone(),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }
}

/// Parse a raw model reply into a title and a summary.
pub fn parse_model_output(raw: &str, config: &ParserConfig) -> Result<ParsedResult, ParseError> {
    let output = raw.trim();

    if let Some(caps) = config.pattern.captures(output) {
        let title = caps.get(1).map_or("", |m| m.as_str());
        let summary = caps.get(2).map_or("", |m| m.as_str());
        return build(title, summary, ParseConfidence::Structured);
    }

    match output.split_once('\n') {
        Some((first, rest)) if first.chars().count() < config.title_max_chars => {
            build(first, rest, ParseConfidence::Heuristic)
        }
        _ => Err(ParseError::UnexpectedFormat),
    }
}

fn build(
    title: &str,
    summary: &str,
    confidence: ParseConfidence,
) -> Result<ParsedResult, ParseError> {
    let title = title.trim();
    let summary = summary.trim();
    if title.is_empty() {
        return Err(ParseError::EmptyField("title"));
    }
    if summary.is_empty() {
        return Err(ParseError::EmptyField("summary"));
    }
    Ok(ParsedResult {
        title: title.to_string(),
        summary: summary.to_string(),
        confidence,
    })
}
