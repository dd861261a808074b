//! Summarize command handler.
//!
//! Runs the same pipeline as the web form on text read from a file or
//! stdin.

use std::path::Path;

use sumdoc_core::SummaryRequest;
use tokio::io::AsyncReadExt;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Execute the summarize command.
pub async fn execute(ctx: &CliContext, file: Option<&Path>) -> Result<(), CliError> {
    let text = read_input(file).await?;
    let outcome = ctx.summarizer.summarize(&SummaryRequest::new(text)).await?;

    println!("Título: {}", outcome.parsed.title);
    println!("Resumo: {}", outcome.parsed.summary);
    println!("Arquivo: {}", outcome.document.path.display());
    Ok(())
}

async fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CliError::Io(format!("{}: {e}", path.display()))),
        None => {
            tracing::debug!("Reading text from stdin");
            let mut text = String::new();
            tokio::io::stdin().read_to_string(&mut text).await?;
            Ok(text)
        }
    }
}
