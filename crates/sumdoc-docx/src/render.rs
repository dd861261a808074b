//! `.docx` rendering via docx-rs.
//!
//! A generated document is two paragraphs: the title styled as a level-1
//! heading, then the summary as body text. A `.docx` file is a ZIP package
//! of XML parts; docx-rs builds the parts and packs them.

use std::io::Cursor;

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use sumdoc_core::StorageError;

/// MIME type of Word documents.
pub const DOCX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Paragraph style id used for the title.
pub const HEADING_STYLE_ID: &str = "Heading1";

/// Render a document with `title` as heading and `summary` as body.
///
/// Both strings are written verbatim; line breaks become in-paragraph
/// breaks so multi-line summaries stay one paragraph.
pub fn render_docx(title: &str, summary: &str) -> Result<Vec<u8>, StorageError> {
    let heading_style = Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
        .name("Heading 1")
        .bold()
        .size(32);

    let heading = Paragraph::new()
        .style(HEADING_STYLE_ID)
        .add_run(text_run(title));
    let body = Paragraph::new().add_run(text_run(summary));

    let mut buf = Cursor::new(Vec::new());
    Docx::new()
        .add_style(heading_style)
        .add_paragraph(heading)
        .add_paragraph(body)
        .build()
        .pack(&mut buf)
        .map_err(|e| StorageError::Render(e.to_string()))?;

    Ok(buf.into_inner())
}

fn text_run(text: &str) -> Run {
    text.split('\n')
        .enumerate()
        .fold(Run::new(), |run, (i, line)| {
            let run = if i > 0 {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            };
            run.add_text(line)
        })
}
