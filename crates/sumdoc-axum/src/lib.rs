//! Axum web adapter for sumdoc.
//!
//! Serves the input form, runs the summarize pipeline on submission and
//! hands generated documents back for download.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings; they are used by tests/
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;
#[cfg(test)]
use zip as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod pages;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::{create_router, create_router_with_static};
pub use state::AppState;
