//! Summarize service - the request pipeline.
//!
//! One call runs prompt → generate → parse → save in sequence. Nothing is
//! retried; a failure at any step returns immediately and, before the save
//! step, leaves the output directory untouched.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::{SummaryOutcome, SummaryRequest};
use crate::parsing::{ParserConfig, parse_model_output};
use crate::ports::{CoreError, DocumentStore, TextGenerator};
use crate::prompt::PromptTemplate;

/// Pipeline from user text to a stored document.
pub struct SummarizeService {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn DocumentStore>,
    prompt: PromptTemplate,
    parser: ParserConfig,
}

impl SummarizeService {
    /// Create a service with the default prompt and parser settings.
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            generator,
            store,
            prompt: PromptTemplate::default(),
            parser: ParserConfig::default(),
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
        self.prompt = prompt;
        self
    }

    #[must_use]
    pub fn with_parser(mut self, parser: ParserConfig) -> Self {
        self.parser = parser;
        self
    }

    pub const fn parser(&self) -> &ParserConfig {
        &self.parser
    }

    /// Run the whole pipeline for one request.
    pub async fn summarize(&self, request: &SummaryRequest) -> Result<SummaryOutcome, CoreError> {
        if request.is_blank() {
            return Err(CoreError::Validation("text must not be empty".to_string()));
        }

        let prompt = self.prompt.render(&request.text);
        info!(
            backend = %self.generator.describe(),
            input_chars = request.text.chars().count(),
            "Generating title and summary"
        );

        let response = self.generator.generate(&prompt).await?;
        debug!(output = %response.raw, "Model output");

        let parsed = parse_model_output(&response.raw, &self.parser).inspect_err(|e| {
            warn!(error = %e, output = %response.raw, "Could not parse model output");
        })?;
        if parsed.confidence.is_low() {
            warn!(
                title = %parsed.title,
                "Model ignored the requested layout; title taken from the first line"
            );
        }

        let document = self.store.save(&parsed).await?;
        info!(file_name = %document.file_name, "Summary document written");

        Ok(SummaryOutcome { parsed, document })
    }

    /// Read a previously generated document.
    pub async fn open_document(&self, file_name: &str) -> Result<Vec<u8>, CoreError> {
        Ok(self.store.open(file_name).await?)
    }
}
