//! JSON API handlers.

use axum::Json;
use axum::extract::State;
use sumdoc_core::SummaryRequest;

use crate::dto::{SummarizeRequest, SummaryResponse};
use crate::error::HttpError;
use crate::state::AppState;

/// Summarize text and return the result as JSON.
pub async fn summarize(
    State(state): State<AppState>,
    Json(req): Json<SummarizeRequest>,
) -> Result<Json<SummaryResponse>, HttpError> {
    let outcome = state
        .summarizer
        .summarize(&SummaryRequest::new(req.text))
        .await?;
    Ok(Json(outcome.into()))
}
