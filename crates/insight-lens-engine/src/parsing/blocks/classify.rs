use super::{
    kinds::{Heading, ItemParts, NumberedItem, Paragraph},
    types::{Block, RenderNode},
};

/// Assigns a [`RenderNode`] to each answer block.
///
/// Tests run in priority order and the first match wins:
/// 1. heading (`**...:**`)
/// 2. numbered item (`<digits>.`)
/// 3. paragraph (everything else)
///
/// Each block is classified on its own text only. A block that almost
/// matches a higher-priority form falls through to the next one instead of
/// failing.
pub struct AnswerBlockClassifier;

impl AnswerBlockClassifier {
    /// Classifies a block into exactly one [`RenderNode`].
    pub fn classify(&self, block: &Block<'_>) -> RenderNode {
        classify_block(block.text)
    }
}

/// Classifies trimmed block text into exactly one [`RenderNode`].
pub fn classify_block(text: &str) -> RenderNode {
    if Heading::matches(text) {
        return RenderNode::Heading {
            text: Heading::text(text),
        };
    }

    if let Some(ItemParts {
        ordinal,
        title,
        body,
    }) = NumberedItem::parse(text)
    {
        return RenderNode::NumberedItem {
            ordinal: ordinal.to_string(),
            title,
            body: body.to_string(),
        };
    }

    RenderNode::Paragraph {
        spans: Paragraph::spans(text),
    }
}
