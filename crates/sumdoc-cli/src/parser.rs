//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Summarize text with a local model and save the result as a Word document.
#[derive(Parser)]
#[command(name = "sumdoc")]
#[command(about = "Summarize text with a local model into .docx files")]
#[command(version)]
pub struct Cli {
    /// Directory generated documents are written to
    /// (falls back to SUMDOC_OUTPUT_DIR, then ./resumos)
    #[arg(long = "output-dir", global = true)]
    pub output_dir: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
