//! Request and response bodies.

use serde::{Deserialize, Serialize};
use sumdoc_core::{ParseConfidence, SummaryOutcome};

use crate::pages::download_href;

/// Form body of `POST /summarize/`.
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    pub text: String,
}

/// JSON body of `POST /api/summarize`.
#[derive(Debug, Deserialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// JSON reply of `POST /api/summarize`.
#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub title: String,
    pub summary: String,
    pub file_name: String,
    pub confidence: ParseConfidence,
    pub download_url: String,
}

impl From<SummaryOutcome> for SummaryResponse {
    fn from(outcome: SummaryOutcome) -> Self {
        let download_url = download_href(&outcome.document.file_name);
        Self {
            title: outcome.parsed.title,
            summary: outcome.parsed.summary,
            file_name: outcome.document.file_name,
            confidence: outcome.parsed.confidence,
            download_url,
        }
    }
}
