//! Form submission handler.

use axum::Form;
use axum::extract::State;
use axum::response::Html;
use sumdoc_core::SummaryRequest;

use crate::dto::SummarizeForm;
use crate::error::HttpError;
use crate::pages::{IndexView, render_index};
use crate::state::AppState;

/// Summarize the submitted text and render the page with the result.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SummarizeForm>,
) -> Result<Html<String>, HttpError> {
    let request = SummaryRequest::new(form.text);
    let outcome = state.summarizer.summarize(&request).await?;

    Ok(Html(render_index(&IndexView {
        text: Some(&request.text),
        title: Some(&outcome.parsed.title),
        summary: Some(&outcome.parsed.summary),
        file_name: Some(&outcome.document.file_name),
    })))
}
