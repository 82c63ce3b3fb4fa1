use serde::Serialize;

use super::kinds::Emphasis;

/// A run of paragraph text, either plain or emphasized.
///
/// Spans own their text with delimiters already removed, so a renderer
/// only has to pick a style per variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InlineSpan {
    /// Text outside any `**` pair.
    PlainText { text: String },
    /// Text between a `**` pair (rendered bold).
    Emphasized { text: String },
}

impl InlineSpan {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::PlainText { text: text.into() }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self::Emphasized { text: text.into() }
    }

    /// The span's text without delimiters.
    pub fn text(&self) -> &str {
        match self {
            Self::PlainText { text } | Self::Emphasized { text } => text,
        }
    }

    pub fn is_emphasized(&self) -> bool {
        matches!(self, Self::Emphasized { .. })
    }

    /// Rebuilds source text from spans, re-inserting `**` around emphasized runs.
    ///
    /// For input with a balanced delimiter count this reproduces the string
    /// that was parsed.
    pub fn rejoin(spans: &[InlineSpan]) -> String {
        spans
            .iter()
            .map(|span| match span {
                Self::PlainText { text } => text.clone(),
                Self::Emphasized { text } => Emphasis::wrap(text),
            })
            .collect()
    }

    /// Concatenates span texts, ignoring emphasis.
    pub fn plain_text(spans: &[InlineSpan]) -> String {
        spans.iter().map(InlineSpan::text).collect()
    }
}
