//! Server-rendered HTML pages.
//!
//! There is a single page: the input form, optionally followed by the
//! result of the last submission. All dynamic text is escaped.

/// What the index page shows besides the form.
#[derive(Debug, Default)]
pub struct IndexView<'a> {
    /// Text to prefill the form with.
    pub text: Option<&'a str>,
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    /// Generated document to link to.
    pub file_name: Option<&'a str>,
}

/// Link target for downloading `file_name`.
pub fn download_href(file_name: &str) -> String {
    format!("/download/{}", urlencoding::encode(file_name))
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render the index page.
pub fn render_index(view: &IndexView<'_>) -> String {
    let text = escape_html(view.text.unwrap_or_default());

    let mut result = String::new();
    if let Some(summary) = view.summary {
        result.push_str("<section class=\"result\">\n");
        if let Some(title) = view.title {
            result.push_str(&format!("  <h2>{}</h2>\n", escape_html(title)));
        }
        result.push_str(&format!(
            "  <p class=\"summary\">{}</p>\n",
            escape_html(summary)
        ));
        if let Some(file_name) = view.file_name {
            result.push_str(&format!(
                "  <p><a class=\"download\" href=\"{}\">Baixar {}</a></p>\n",
                escape_html(&download_href(file_name)),
                escape_html(file_name)
            ));
        }
        result.push_str("</section>\n");
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
<meta charset="utf-8">
<title>Resumidor de textos</title>
<style>
  body {{ font-family: sans-serif; max-width: 48rem; margin: 2rem auto; padding: 0 1rem; }}
  textarea {{ width: 100%; min-height: 16rem; }}
  .summary {{ white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>Resumidor de textos</h1>
<form method="post" action="/summarize/">
  <label for="text">Texto</label>
  <textarea id="text" name="text" required>{text}</textarea>
  <button type="submit">Resumir</button>
</form>
{result}</body>
</html>
"#
    )
}
