//! Command builder for `ollama run`.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

/// Builder for constructing an `ollama run` invocation.
///
/// # Example
///
/// ```rust,ignore
/// let cmd = OllamaCommandBuilder::new("ollama", "llama3.2:1b")
///     .prompt("Resuma ...")
///     .build();
/// ```
pub struct OllamaCommandBuilder {
    binary_path: PathBuf,
    model: String,
    additional_args: Vec<String>,
    prompt: Option<String>,
}

impl OllamaCommandBuilder {
    /// Create a new builder with the required binary and model.
    pub fn new(binary_path: impl Into<PathBuf>, model: impl Into<String>) -> Self {
        Self {
            binary_path: binary_path.into(),
            model: model.into(),
            additional_args: Vec::new(),
            prompt: None,
        }
    }

    /// Add an argument placed after the model and before the prompt.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.additional_args.push(arg.into());
        self
    }

    /// Set the prompt, passed as the final argument.
    #[must_use]
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Build the final Command ready for execution.
    ///
    /// The command is constructed as `<binary> run <model> [args...] [prompt]`
    /// with stdin closed, stdout/stderr piped, and the child killed if the
    /// handle is dropped before it exits.
    pub fn build(self) -> Command {
        let mut cmd = Command::new(&self.binary_path);
        cmd.arg("run").arg(&self.model);

        for arg in &self.additional_args {
            cmd.arg(arg);
        }

        if let Some(prompt) = &self.prompt {
            cmd.arg(prompt);
        }

        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(cmd: &Command) -> Vec<String> {
        cmd.as_std()
            .get_args()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn builder_constructs_run_command() {
        let cmd = OllamaCommandBuilder::new("/usr/bin/ollama", "llama3.2:1b")
            .prompt("Resuma isto")
            .build();

        assert_eq!(cmd.as_std().get_program(), "/usr/bin/ollama");
        assert_eq!(args_of(&cmd), ["run", "llama3.2:1b", "Resuma isto"]);
    }

    #[test]
    fn prompt_is_a_single_argument() {
        let prompt = "linha 1\nlinha 2 com espaços e 'aspas'";
        let cmd = OllamaCommandBuilder::new("ollama", "m").prompt(prompt).build();

        assert_eq!(args_of(&cmd).last().map(String::as_str), Some(prompt));
    }

    #[test]
    fn extra_args_come_before_the_prompt() {
        let cmd = OllamaCommandBuilder::new("ollama", "m")
            .prompt("p")
            .arg("--nowordwrap")
            .build();

        assert_eq!(args_of(&cmd), ["run", "m", "--nowordwrap", "p"]);
    }
}
