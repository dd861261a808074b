//! Default values shared by adapters.

/// Executable used to run the model.
pub const DEFAULT_OLLAMA_BIN: &str = "ollama";

/// Model identifier passed to `ollama run`.
pub const DEFAULT_MODEL: &str = "llama3.2:1b";

/// Interface the web server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Port the web server listens on.
pub const DEFAULT_PORT: u16 = 8000;

/// Directory served under `/static` when present.
pub const DEFAULT_STATIC_DIR: &str = "static";
