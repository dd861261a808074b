//! Main commands enum and shared argument groups.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Subcommand};
use sumdoc_core::DEFAULT_TITLE_MAX_CHARS;
use sumdoc_core::settings::{DEFAULT_HOST, DEFAULT_MODEL, DEFAULT_OLLAMA_BIN, DEFAULT_PORT};
use sumdoc_runtime::OllamaConfig;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Start the web form
    Serve(ServeArgs),

    /// Summarize text from a file or stdin and write the document
    Summarize {
        /// Read the text from this file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,

        #[command(flatten)]
        model: ModelArgs,
    },

    /// Show the resolved output directory
    Paths,
}

/// Options of `sumdoc serve`.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    /// Interface to bind
    #[arg(long, env = "SUMDOC_HOST", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "SUMDOC_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory served under /static (defaults to ./static when it exists)
    #[arg(long, env = "SUMDOC_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,

    #[command(flatten)]
    pub model: ModelArgs,
}

/// How to run the model and read its reply.
#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Path or name of the ollama executable
    #[arg(long = "ollama-bin", env = "SUMDOC_OLLAMA_BIN", default_value = DEFAULT_OLLAMA_BIN)]
    pub ollama_bin: PathBuf,

    /// Model passed to `ollama run`
    #[arg(long, env = "SUMDOC_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Give up on the model after this many seconds (waits indefinitely if unset)
    #[arg(long = "timeout-secs", env = "SUMDOC_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Longest first line accepted as a title when the reply is unstructured
    #[arg(
        long = "title-max-chars",
        env = "SUMDOC_TITLE_MAX_CHARS",
        default_value_t = DEFAULT_TITLE_MAX_CHARS
    )]
    pub title_max_chars: usize,
}

impl ModelArgs {
    pub fn ollama_config(&self) -> OllamaConfig {
        OllamaConfig::default()
            .with_binary(&self.ollama_bin)
            .with_model(&self.model)
            .with_timeout(self.timeout_secs.map(Duration::from_secs))
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::parser::Cli;

    #[test]
    fn serve_overrides() {
        let cli = Cli::parse_from([
            "sumdoc",
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--model",
            "llama3.2:3b",
            "--timeout-secs",
            "30",
        ]);
        let Some(Commands::Serve(args)) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host, "127.0.0.1");
        assert_eq!(args.port, 9000);

        let ollama = args.model.ollama_config();
        assert_eq!(ollama.model, "llama3.2:3b");
        assert_eq!(ollama.timeout, Some(Duration::from_secs(30)));
    }

    #[test]
    fn summarize_takes_a_file() {
        let cli = Cli::parse_from(["sumdoc", "summarize", "--file", "notes.txt"]);
        let Some(Commands::Summarize { file, .. }) = cli.command else {
            panic!("expected summarize");
        };
        assert_eq!(file, Some(PathBuf::from("notes.txt")));
    }
}
