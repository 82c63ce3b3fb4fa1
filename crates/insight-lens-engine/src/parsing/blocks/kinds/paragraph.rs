use crate::parsing::inline::{InlineSpan, parse_inline};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when neither
/// the heading nor the numbered-item test matches. Inline parsing is applied
/// to paragraph content.
pub struct Paragraph;

impl Paragraph {
    /// Splits paragraph text into inline spans.
    pub fn spans(block: &str) -> Vec<InlineSpan> {
        parse_inline(block)
    }
}
