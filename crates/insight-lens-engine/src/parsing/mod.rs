pub mod blocks;
pub mod inline;
pub mod snapshot;
pub mod span;

#[cfg(test)]
mod tests;

use blocks::{AnswerBlockClassifier, RenderNode, split_blocks};

/// The node sequence for one answer, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedAnswer {
    pub nodes: Vec<RenderNode>,
}

impl ParsedAnswer {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RenderNode> {
        self.nodes.iter()
    }
}

impl IntoIterator for ParsedAnswer {
    type Item = RenderNode;
    type IntoIter = std::vec::IntoIter<RenderNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParsedAnswer {
    type Item = &'a RenderNode;
    type IntoIter = std::slice::Iter<'a, RenderNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// Parses a raw AI answer into render nodes.
///
/// Pure and total: the same input always yields the same nodes, and an
/// empty or whitespace-only answer yields none.
pub fn parse_answer(raw: &str) -> ParsedAnswer {
    let classifier = AnswerBlockClassifier;
    let blocks = split_blocks(raw);

    let nodes: Vec<RenderNode> = blocks.iter().map(|b| classifier.classify(b)).collect();

    log::debug!(
        "parsed answer: {} bytes, {} blocks, {} nodes",
        raw.len(),
        blocks.len(),
        nodes.len()
    );

    ParsedAnswer { nodes }
}
