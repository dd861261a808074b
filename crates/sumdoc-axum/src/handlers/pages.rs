//! Page handlers.

use axum::response::Html;

use crate::pages::{IndexView, render_index};

/// Render the input form.
pub async fn index() -> Html<String> {
    Html(render_index(&IndexView::default()))
}
