//! Instruction prompt sent to the text-generation backend.

/// Placeholder replaced by the user's text.
pub const TEXT_PLACEHOLDER: &str = "{text}";

/// Default instruction, in Portuguese, asking for a short title and a
/// summary in the `Título:` / `Resumo:` layout the parser expects.
///
/// The `\n` sequences are literal backslash-n characters; the backend
/// receives them as written.
pub const DEFAULT_PROMPT_TEMPLATE: &str = "Resuma o seguinte texto e gere um título curto. \
Use este formato: 'Título: <título gerado>\\nResumo: <resumo gerado>'\\n\\n{text}";

/// A prompt template with a single `{text}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// Create a template. Returns `None` when the placeholder is missing,
    /// since the user's text would otherwise never reach the model.
    pub fn new(template: impl Into<String>) -> Option<Self> {
        let template = template.into();
        template
            .contains(TEXT_PLACEHOLDER)
            .then_some(Self { template })
    }

    /// Embed `text` into the template.
    pub fn render(&self, text: &str) -> String {
        self.template.replacen(TEXT_PLACEHOLDER, text, 1)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            template: DEFAULT_PROMPT_TEMPLATE.to_string(),
        }
    }
}
