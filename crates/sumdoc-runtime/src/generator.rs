//! `TextGenerator` implementation backed by the Ollama CLI.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use sumdoc_core::ModelResponse;
use sumdoc_core::ports::{GenerationError, TextGenerator};
use sumdoc_core::settings::{DEFAULT_MODEL, DEFAULT_OLLAMA_BIN};
use tracing::{debug, warn};

use crate::command::OllamaCommandBuilder;

/// Configuration for [`OllamaGenerator`].
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    /// Path or name of the `ollama` executable.
    pub binary: PathBuf,
    /// Model identifier passed to `ollama run`.
    pub model: String,
    /// Upper bound on one invocation. `None` waits indefinitely.
    pub timeout: Option<Duration>,
    /// Extra arguments placed between the model and the prompt.
    pub extra_args: Vec<String>,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            binary: PathBuf::from(DEFAULT_OLLAMA_BIN),
            model: DEFAULT_MODEL.to_string(),
            timeout: None,
            extra_args: Vec::new(),
        }
    }
}

impl OllamaConfig {
    #[must_use]
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Runs one `ollama run` process per prompt.
///
/// # Design
///
/// - Pure OS/process concerns only; parsing lives in core
/// - The wait is async, so other requests keep being served meanwhile
/// - Without a timeout a hung backend blocks the caller indefinitely
pub struct OllamaGenerator {
    config: OllamaConfig,
}

impl OllamaGenerator {
    pub fn new(config: OllamaConfig) -> Result<Self, GenerationError> {
        if config.binary.as_os_str().is_empty() {
            return Err(GenerationError::Configuration(
                "ollama binary path is empty".to_string(),
            ));
        }
        if config.model.trim().is_empty() {
            return Err(GenerationError::Configuration(
                "model name is empty".to_string(),
            ));
        }
        if config.timeout.is_some_and(|t| t.is_zero()) {
            return Err(GenerationError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }
        Ok(Self { config })
    }

    pub const fn config(&self) -> &OllamaConfig {
        &self.config
    }
}

#[async_trait]
impl TextGenerator for OllamaGenerator {
    async fn generate(&self, prompt: &str) -> Result<ModelResponse, GenerationError> {
        let mut builder = OllamaCommandBuilder::new(&self.config.binary, &self.config.model);
        for arg in &self.config.extra_args {
            builder = builder.arg(arg);
        }
        let mut cmd = builder.prompt(prompt).build();

        debug!(
            binary = %self.config.binary.display(),
            model = %self.config.model,
            prompt_chars = prompt.chars().count(),
            "Spawning model process"
        );

        let child = cmd.spawn().map_err(|e| {
            GenerationError::Spawn(format!("{}: {}", self.config.binary.display(), e))
        })?;

        // Dropping the future on timeout drops the child, which kills it.
        let wait = child.wait_with_output();
        let output = match self.config.timeout {
            Some(limit) => tokio::time::timeout(limit, wait)
                .await
                .map_err(|_| GenerationError::TimedOut(limit))?,
            None => wait.await,
        }
        .map_err(|e| GenerationError::Spawn(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            warn!(status = %output.status, stderr = %stderr, "Model process failed");
            return Err(GenerationError::Failed {
                status: output.status.to_string(),
                stderr,
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(ModelResponse::new(stdout))
    }

    fn describe(&self) -> String {
        format!("{} run {}", self.config.binary.display(), self.config.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_llama_model() {
        let config = OllamaConfig::default();
        assert_eq!(config.binary, PathBuf::from("ollama"));
        assert_eq!(config.model, "llama3.2:1b");
        assert!(config.timeout.is_none());
    }

    #[test]
    fn empty_model_is_rejected() {
        let result = OllamaGenerator::new(OllamaConfig::default().with_model("  "));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let result =
            OllamaGenerator::new(OllamaConfig::default().with_timeout(Some(Duration::ZERO)));
        assert!(matches!(result, Err(GenerationError::Configuration(_))));
    }

    #[test]
    fn describe_names_binary_and_model() {
        let generator = OllamaGenerator::new(OllamaConfig::default()).unwrap();
        assert_eq!(generator.describe(), "ollama run llama3.2:1b");
    }

    #[tokio::test]
    async fn missing_binary_is_a_spawn_error() {
        let generator = OllamaGenerator::new(
            OllamaConfig::default().with_binary("/nonexistent/path/ollama"),
        )
        .unwrap();

        let err = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(err, GenerationError::Spawn(_)));
    }
}
