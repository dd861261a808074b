//! Runs `sumdoc summarize` end to end against a fake `ollama` script.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use sumdoc_cli::{CliConfig, CliError, ModelArgs, bootstrap, handlers};
use tempfile::TempDir;

fn fake_ollama(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("ollama");
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

fn model_args(bin: PathBuf) -> ModelArgs {
    ModelArgs {
        ollama_bin: bin,
        model: "llama3.2:1b".to_string(),
        timeout_secs: Some(10),
        title_max_chars: 50,
    }
}

fn documents(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        return Vec::new();
    }
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[tokio::test]
async fn summarize_file_writes_a_document() {
    let temp = TempDir::new().unwrap();
    let bin = fake_ollama(
        temp.path(),
        r"printf 'Título: Ata da Reunião\nResumo: Orçamento aprovado.\n'",
    );
    let input = temp.path().join("entrada.txt");
    fs::write(&input, "A reunião aprovou o orçamento do próximo ano.").unwrap();
    let out = temp.path().join("resumos");

    let ctx = bootstrap(CliConfig::from_args(out.clone(), &model_args(bin))).unwrap();
    handlers::summarize::execute(&ctx, Some(&input)).await.unwrap();

    let files = documents(&out);
    assert_eq!(files.len(), 1, "unexpected files: {files:?}");
    assert!(files[0].starts_with("Ata da Reunião_"));
    assert!(files[0].ends_with(".docx"));
}

#[tokio::test]
async fn failing_model_maps_to_process_exit_code() {
    let temp = TempDir::new().unwrap();
    let bin = fake_ollama(temp.path(), "echo 'Error: model not found' >&2\nexit 1");
    let input = temp.path().join("entrada.txt");
    fs::write(&input, "texto").unwrap();
    let out = temp.path().join("resumos");

    let ctx = bootstrap(CliConfig::from_args(out.clone(), &model_args(bin))).unwrap();
    let err = handlers::summarize::execute(&ctx, Some(&input))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::Process(_)));
    assert_eq!(err.exit_code(), 71);
    assert!(documents(&out).is_empty());
}

#[tokio::test]
async fn blank_file_is_rejected_before_running_the_model() {
    let temp = TempDir::new().unwrap();
    let marker = temp.path().join("ran");
    let bin = fake_ollama(temp.path(), &format!("touch '{}'", marker.display()));
    let input = temp.path().join("vazio.txt");
    fs::write(&input, "  \n").unwrap();

    let ctx = bootstrap(CliConfig::from_args(
        temp.path().join("resumos"),
        &model_args(bin),
    ))
    .unwrap();
    let err = handlers::summarize::execute(&ctx, Some(&input))
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 2);
    assert!(!marker.exists());
}
