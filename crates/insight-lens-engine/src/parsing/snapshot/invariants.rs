use crate::parsing::{
    blocks::{Block, RenderNode, classify_block},
    inline::{InlineSpan, kinds::Emphasis},
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - There is exactly one node per block
/// - Block spans are in bounds, slice back to the block text, and are ordered
///   without overlap
/// - Block text is non-empty and trimmed
/// - Everything outside block spans is whitespace
/// - Re-classifying a block yields the same node
/// - Paragraphs with a balanced delimiter count round-trip through their spans
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(raw: &str, blocks: &[Block<'_>], nodes: &[RenderNode]) {
    assert_eq!(
        blocks.len(),
        nodes.len(),
        "node count differs from block count"
    );

    let mut covered_to = 0usize;
    for (b, node) in blocks.iter().zip(nodes) {
        assert!(
            b.span.start <= b.span.end && b.span.end <= raw.len(),
            "block span out of bounds: {:?} (answer len: {})",
            b.span,
            raw.len()
        );
        assert_eq!(
            b.span.slice(raw),
            Some(b.text),
            "block span does not slice to block text: {:?}",
            b.span
        );
        assert!(!b.text.is_empty(), "empty block at {:?}", b.span);
        assert_eq!(b.text, b.text.trim(), "untrimmed block at {:?}", b.span);
        assert!(
            b.span.start >= covered_to,
            "block spans overlap or are out of order at {:?}",
            b.span
        );

        let gap = &raw[covered_to..b.span.start];
        assert!(
            gap.trim().is_empty(),
            "non-blank text outside blocks: {gap:?}"
        );
        covered_to = b.span.end;

        assert_eq!(
            &classify_block(b.text),
            node,
            "classification is not deterministic for {:?}",
            b.span
        );

        if let RenderNode::Paragraph { spans } = node
            && Emphasis::count(b.text) % 2 == 0
        {
            assert_eq!(
                InlineSpan::rejoin(spans),
                b.text,
                "paragraph spans do not round-trip at {:?}",
                b.span
            );
        }
    }

    let tail = &raw[covered_to..];
    assert!(
        tail.trim().is_empty(),
        "non-blank text after last block: {tail:?}"
    );
}
