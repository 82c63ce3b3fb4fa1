use crate::parsing::span::Span;

use super::types::Block;

/// Splits a raw answer into blank-line-separated blocks.
///
/// Each segment between `"\n\n"` separators is trimmed; segments that are
/// empty after trimming are dropped. Order is preserved. Any input is valid:
/// an empty or whitespace-only answer yields no blocks.
///
/// Line endings are not normalised, so `"\r\n\r\n"` is not a separator.
pub fn split_blocks(raw: &str) -> Vec<Block<'_>> {
    let mut blocks = Vec::new();
    let mut offset = 0usize;

    for segment in raw.split(Block::SEPARATOR) {
        let leading = segment.len() - segment.trim_start().len();
        let text = segment.trim();
        if !text.is_empty() {
            let start = offset + leading;
            blocks.push(Block {
                text,
                span: Span {
                    start,
                    end: start + text.len(),
                },
            });
        }
        offset += segment.len() + Block::SEPARATOR.len();
    }

    blocks
}
