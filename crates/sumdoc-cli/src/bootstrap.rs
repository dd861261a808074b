//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter: the Ollama process runner, the `.docx` store and
//! the summarize service on top of them. `serve` composes its own context
//! through `sumdoc_axum::bootstrap`.

use std::path::PathBuf;
use std::sync::Arc;

use sumdoc_core::{ParserConfig, SummarizeService};
use sumdoc_docx::FsDocumentStore;
use sumdoc_runtime::{OllamaConfig, OllamaGenerator};

use crate::commands::ModelArgs;
use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory generated documents are written to.
    pub output_dir: PathBuf,
    /// How to run the model.
    pub ollama: OllamaConfig,
    /// Heuristic title threshold for the output parser.
    pub title_max_chars: usize,
}

impl CliConfig {
    pub fn from_args(output_dir: PathBuf, model: &ModelArgs) -> Self {
        Self {
            output_dir,
            ollama: model.ollama_config(),
            title_max_chars: model.title_max_chars,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// The summarize pipeline.
    pub summarizer: Arc<SummarizeService>,
    /// Where documents land.
    pub output_dir: PathBuf,
}

/// Bootstrap the CLI context with all services.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    tracing::debug!(
        target: "sumdoc.paths",
        output_dir = %config.output_dir.display(),
        ollama = %config.ollama.binary.display(),
        model = %config.ollama.model,
        "CLI bootstrap resolved configuration"
    );

    let generator = OllamaGenerator::new(config.ollama)?;
    let store = FsDocumentStore::new(&config.output_dir);
    let parser = ParserConfig::default().with_title_max_chars(config.title_max_chars);

    let summarizer =
        SummarizeService::new(Arc::new(generator), Arc::new(store)).with_parser(parser);

    Ok(CliContext {
        summarizer: Arc::new(summarizer),
        output_dir: config.output_dir,
    })
}
