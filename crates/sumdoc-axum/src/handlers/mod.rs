//! HTTP request handlers for the Axum web server.
//!
//! Handlers are thin wrappers that delegate to `SummarizeService`.

pub mod api;
pub mod download;
pub mod pages;
pub mod summarize;
