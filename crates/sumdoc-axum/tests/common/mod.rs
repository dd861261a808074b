//! Shared fixtures for sumdoc-axum tests.
//!
//! Routes are exercised against a real `FsDocumentStore` in a temp
//! directory and a scripted generator, so no model has to be installed.

use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sumdoc_axum::AxumContext;
use sumdoc_core::{GenerationError, ModelResponse, SummarizeService, TextGenerator};
use sumdoc_docx::FsDocumentStore;

/// Canned model reply in the structured format.
pub const STRUCTURED_REPLY: &str =
    "Título: Relatório Trimestral\nResumo: As vendas cresceram 10% no trimestre.";

/// Generator that replays a fixed outcome and counts calls.
pub struct StubGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn replying(raw: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(raw.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn failing(stderr: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(stderr.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    #[allow(dead_code)]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    async fn generate(&self, _prompt: &str) -> Result<ModelResponse, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(raw) => Ok(ModelResponse::new(raw.clone())),
            Err(stderr) => Err(GenerationError::Failed {
                status: "exit status: 1".to_string(),
                stderr: stderr.clone(),
            }),
        }
    }

    fn describe(&self) -> String {
        "stub".to_string()
    }
}

/// Context wired to `generator` and a store rooted at `output_dir`.
pub fn context(generator: Arc<StubGenerator>, output_dir: &Path) -> AxumContext {
    let store = FsDocumentStore::new(output_dir);
    let service = SummarizeService::new(generator, Arc::new(store));
    AxumContext::new(Arc::new(service))
}

/// Names of the files currently in `dir`.
pub fn files_in(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
