pub mod io;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use models::{AnswerView, ModelError, QueryResponse};
pub use parsing::{
    ParsedAnswer,
    blocks::{Block, RenderNode, classify_block, split_blocks},
    inline::{InlineSpan, parse_inline},
    parse_answer,
};
