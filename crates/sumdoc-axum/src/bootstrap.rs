//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the web adapter: the Ollama-backed generator, the filesystem
//! document store and the summarize service on top of them.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use sumdoc_core::paths::{DEFAULT_OUTPUT_DIR, verify_writable};
use sumdoc_core::settings::{DEFAULT_HOST, DEFAULT_PORT};
use sumdoc_core::{DEFAULT_TITLE_MAX_CHARS, ParserConfig, SummarizeService};
use sumdoc_docx::FsDocumentStore;
use sumdoc_runtime::{OllamaConfig, OllamaGenerator};

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Directory generated documents are written to.
    pub output_dir: PathBuf,
    /// Optional directory served under `/static`.
    pub static_dir: Option<PathBuf>,
    /// How to run the model.
    pub ollama: OllamaConfig,
    /// Heuristic title threshold for the output parser.
    pub title_max_chars: usize,
}

impl ServerConfig {
    /// Create config with default values.
    pub fn with_defaults() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            static_dir: None,
            ollama: OllamaConfig::default(),
            title_max_chars: DEFAULT_TITLE_MAX_CHARS,
        }
    }

    /// Set the static directory served under `/static`.
    #[must_use]
    pub fn with_static_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.static_dir = Some(path.into());
        self
    }

    /// Set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_dir = path.into();
        self
    }

    /// Socket address string to bind.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// The summarize pipeline.
    pub summarizer: Arc<SummarizeService>,
}

impl AxumContext {
    pub const fn new(summarizer: Arc<SummarizeService>) -> Self {
        Self { summarizer }
    }
}

/// Bootstrap the Axum server with all services.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "sumdoc.paths",
        output_dir = %config.output_dir.display(),
        static_dir = ?config.static_dir,
        ollama = %config.ollama.binary.display(),
        model = %config.ollama.model,
        "Axum bootstrap resolved configuration"
    );

    // 1. Document store; the output directory exists before the first request
    let store = FsDocumentStore::new(&config.output_dir);
    store.ensure_root().with_context(|| {
        format!(
            "Failed to prepare output directory {}",
            config.output_dir.display()
        )
    })?;
    verify_writable(&config.output_dir)?;

    // 2. Model backend
    let generator = OllamaGenerator::new(config.ollama.clone())?;

    // 3. Pipeline
    let parser = ParserConfig::default().with_title_max_chars(config.title_max_chars);
    let summarizer = SummarizeService::new(Arc::new(generator), Arc::new(store)).with_parser(parser);

    Ok(AxumContext::new(Arc::new(summarizer)))
}

/// Start the web server.
///
/// If `config.static_dir` is set, its files are served under `/static`.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config)?;

    let app = if let Some(ref static_dir) = config.static_dir {
        info!("Serving static assets from: {}", static_dir.display());
        crate::routes::create_router_with_static(ctx, static_dir)
    } else {
        crate::routes::create_router(ctx)
    };

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("sumdoc web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
