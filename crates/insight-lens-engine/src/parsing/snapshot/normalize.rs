use std::fmt;

use crate::parsing::{
    blocks::{Block, RenderNode},
    inline::InlineSpan,
};

/// A stable, human-readable view of a parse for snapshot files.
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

pub struct BlockSnap {
    pub span: (usize, usize),
    pub kind: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

pub fn normalize(blocks: &[Block<'_>], nodes: &[RenderNode]) -> Snap {
    let blocks = blocks
        .iter()
        .zip(nodes)
        .map(|(b, node)| {
            let fields = match node {
                RenderNode::Heading { text } => vec![("text", text.clone())],
                RenderNode::NumberedItem {
                    ordinal,
                    title,
                    body,
                } => vec![
                    ("ordinal", ordinal.clone()),
                    ("title", title.clone()),
                    ("body", body.clone()),
                ],
                RenderNode::Paragraph { spans } => spans
                    .iter()
                    .map(|span| match span {
                        InlineSpan::PlainText { text } => ("plain", text.clone()),
                        InlineSpan::Emphasized { text } => ("emph", text.clone()),
                    })
                    .collect(),
            };

            BlockSnap {
                span: (b.span.start, b.span.end),
                kind: node.kind_name(),
                fields,
            }
        })
        .collect();

    Snap { blocks }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "blocks: {}", self.blocks.len())?;
        for (i, b) in self.blocks.iter().enumerate() {
            writeln!(f, "[{i}] {}..{} {}", b.span.0, b.span.1, b.kind)?;
            for (key, value) in &b.fields {
                writeln!(f, "    {key}: {value:?}")?;
            }
        }
        Ok(())
    }
}
