use serde::Serialize;

use crate::parsing::{inline::InlineSpan, span::Span};

/// A blank-line-delimited unit of the raw answer.
///
/// Borrows its trimmed text from the answer; `span` locates that text in
/// the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Block<'a> {
    /// Trimmed, non-empty block text.
    pub text: &'a str,
    /// Byte span of `text` in the raw answer.
    pub span: Span,
}

impl Block<'_> {
    /// Separator between blocks: one blank line.
    pub const SEPARATOR: &'static str = "\n\n";
}

/// A classified block, ready for presentation.
///
/// Every block maps to exactly one variant. Presentation layers match on
/// this exhaustively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderNode {
    /// A section header, delimiters and trailing colon removed.
    Heading { text: String },
    /// A recommendation or step: `<ordinal>. <title>: <body>`.
    NumberedItem {
        ordinal: String,
        /// Empty when the item has no colon.
        title: String,
        /// Raw body text; emphasis delimiters are left in place.
        body: String,
    },
    /// Normal prose with inline emphasis already extracted.
    Paragraph { spans: Vec<InlineSpan> },
}

impl RenderNode {
    /// Short name of the variant, for logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Heading { .. } => "Heading",
            Self::NumberedItem { .. } => "NumberedItem",
            Self::Paragraph { .. } => "Paragraph",
        }
    }
}
