//! Route definitions and router construction.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::bootstrap::AxumContext;
use crate::handlers;
use crate::state::AppState;

/// JSON routes, nested under `/api` by the caller.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new().route("/summarize", post(handlers::api::summarize))
}

/// Create the main Axum router.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{file_name}`
pub fn create_router(ctx: AxumContext) -> Router {
    let state: AppState = Arc::new(ctx);

    Router::new()
        .route("/", get(handlers::pages::index))
        .route("/summarize/", post(handlers::summarize::submit))
        .route("/summarize", post(handlers::summarize::submit))
        .route("/download/{file_name}", get(handlers::download::download))
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Create a router that also serves `static_dir` under `/static`.
pub fn create_router_with_static<P: AsRef<Path>>(ctx: AxumContext, static_dir: P) -> Router {
    create_router(ctx).nest_service("/static", ServeDir::new(static_dir.as_ref()))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
