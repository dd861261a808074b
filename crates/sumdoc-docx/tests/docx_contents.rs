//! Inspect the XML inside generated `.docx` packages.

use std::io::{Cursor, Read};

use sumdoc_core::{DocumentStore, ParseConfidence, ParsedResult};
use sumdoc_docx::{FsDocumentStore, HEADING_STYLE_ID, render_docx};
use tempfile::TempDir;

/// Read one part of a `.docx` package as text.
fn read_part(docx: &[u8], name: &str) -> String {
    let mut archive = zip::ZipArchive::new(Cursor::new(docx)).unwrap();
    let mut part = archive.by_name(name).unwrap();
    let mut xml = String::new();
    part.read_to_string(&mut xml).unwrap();
    xml
}

#[test]
fn heading_precedes_summary() {
    let bytes = render_docx("Gatos domésticos", "Gatos dormem até 16 horas por dia.").unwrap();
    let xml = read_part(&bytes, "word/document.xml");

    let title_at = xml.find("Gatos domésticos").expect("title in document");
    let summary_at = xml
        .find("Gatos dormem até 16 horas por dia.")
        .expect("summary in document");
    let style_at = xml.find(HEADING_STYLE_ID).expect("heading style applied");

    assert!(style_at < title_at);
    assert!(title_at < summary_at);
}

#[test]
fn heading_style_is_declared() {
    let bytes = render_docx("T", "S").unwrap();
    let styles = read_part(&bytes, "word/styles.xml");
    assert!(styles.contains(HEADING_STYLE_ID));
}

#[test]
fn multiline_summary_keeps_every_line() {
    let bytes = render_docx("T", "primeira\nsegunda\nterceira").unwrap();
    let xml = read_part(&bytes, "word/document.xml");

    for line in ["primeira", "segunda", "terceira"] {
        assert!(xml.contains(line), "missing {line}");
    }
    assert!(xml.contains("w:br"));
}

#[tokio::test]
async fn stored_file_holds_title_and_summary() {
    let temp = TempDir::new().unwrap();
    let store = FsDocumentStore::new(temp.path());
    let parsed = ParsedResult {
        title: "Chuva: previsão".to_string(),
        summary: "Chuva forte no fim de semana.".to_string(),
        confidence: ParseConfidence::Structured,
    };

    let doc = store.save(&parsed).await.unwrap();
    let bytes = store.open(&doc.file_name).await.unwrap();
    let xml = read_part(&bytes, "word/document.xml");

    // The heading keeps the unsanitized title; only the file name is cleaned.
    assert!(xml.contains("Chuva: previsão"));
    assert!(xml.contains("Chuva forte no fim de semana."));
    assert!(doc.file_name.starts_with("Chuva previsão_"));
}
