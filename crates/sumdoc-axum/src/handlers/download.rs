//! Document download handler.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use sumdoc_docx::DOCX_MIME_TYPE;

use crate::error::HttpError;
use crate::state::AppState;

/// Stream a generated document.
///
/// Any file name present in the output directory can be fetched; there is
/// no ownership check.
pub async fn download(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<Response, HttpError> {
    let bytes = state.summarizer.open_document(&file_name).await?;

    let disposition = format!(
        "attachment; filename*=UTF-8''{}",
        urlencoding::encode(&file_name)
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_MIME_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response())
}
