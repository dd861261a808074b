//! CLI entry point.
//!
//! Loads `.env`, parses arguments, initialises logging and dispatches to the
//! command handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use sumdoc_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};
use sumdoc_core::resolve_output_dir;

/// Logs go to stderr so `summarize` output stays pipeable.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Paths => handlers::paths::execute(cli.output_dir.as_deref()),
        Commands::Serve(args) => {
            let output_dir = resolve_output_dir(cli.output_dir.as_deref())?.path;
            handlers::serve::execute(args, output_dir).await
        }
        Commands::Summarize { file, model } => {
            let output_dir = resolve_output_dir(cli.output_dir.as_deref())?.path;
            let ctx = bootstrap(CliConfig::from_args(output_dir, &model))?;
            handlers::summarize::execute(&ctx, file.as_deref()).await
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
