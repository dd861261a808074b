//! Serve command handler.

use std::path::{Path, PathBuf};

use sumdoc_axum::{ServerConfig, start_server};
use sumdoc_core::settings::DEFAULT_STATIC_DIR;

use crate::commands::ServeArgs;
use crate::error::CliError;

/// Build the server configuration for `args`.
pub fn server_config(args: ServeArgs, output_dir: PathBuf) -> ServerConfig {
    let mut config = ServerConfig::with_defaults().with_output_dir(output_dir);
    config.host = args.host;
    config.port = args.port;
    config.title_max_chars = args.model.title_max_chars;
    config.ollama = args.model.ollama_config();

    // Explicit flag > ./static when present > no static assets
    if let Some(dir) = args.static_dir {
        config = config.with_static_dir(dir);
    } else if Path::new(DEFAULT_STATIC_DIR).is_dir() {
        config = config.with_static_dir(DEFAULT_STATIC_DIR);
    }
    config
}

/// Execute the serve command. Runs until the server stops.
pub async fn execute(args: ServeArgs, output_dir: PathBuf) -> Result<(), CliError> {
    let config = server_config(args, output_dir);

    println!();
    println!("  sumdoc web server starting...");
    println!();
    println!("  Local:    http://localhost:{}", config.port);
    println!("  Bind:     {}", config.bind_addr());
    println!("  Model:    {}", config.ollama.model);
    println!("  Output:   {}", config.output_dir.display());
    if let Some(ref dir) = config.static_dir {
        println!("  Static:   {}", dir.display());
    }
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await?;
    Ok(())
}
