//! Command-line adapter for sumdoc.
//!
//! `sumdoc serve` runs the web form, `sumdoc summarize` runs the same
//! pipeline on a file or stdin, and `sumdoc paths` shows where documents go.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs only
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, ModelArgs, ServeArgs};
pub use error::CliError;
pub use parser::Cli;
