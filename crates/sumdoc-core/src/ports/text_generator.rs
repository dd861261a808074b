//! Text generator trait definition.
//!
//! This port is the whole contract with the generation backend: send a
//! prompt, get raw text back or a failure. Swapping the backend (another
//! CLI, an HTTP API, a test double) never touches parsing or documents.

use async_trait::async_trait;

use super::GenerationError;
use crate::domain::ModelResponse;

/// Backend that turns a prompt into raw model output.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run the backend on `prompt` and return its raw reply.
    async fn generate(&self, prompt: &str) -> Result<ModelResponse, GenerationError>;

    /// Short human-readable backend description, used in logs.
    fn describe(&self) -> String;
}
