//! # Block Parsing
//!
//! Two-phase block parsing of an AI answer.
//!
//! ## Parsing Phases
//!
//! 1. **Splitting** (`split`): the raw answer is cut into blank-line-separated
//!    `Block`s, trimmed, with empty blocks dropped
//!
//! 2. **Classification** (`classify`): `AnswerBlockClassifier` turns each block
//!    into one `RenderNode` by trying heading, numbered item, then paragraph
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `RenderNode`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, NumberedItem, Paragraph)
//! - **`split`**: `split_blocks` for the splitting phase
//! - **`classify`**: `AnswerBlockClassifier` and `classify_block`
//!
//! ## Key Invariants
//!
//! - Classification is total and exclusive: one node per block
//! - Node order equals block order equals source order
//! - Blocks store byte spans into the raw answer

pub mod classify;
pub mod kinds;
pub mod split;
pub mod types;

pub use classify::{AnswerBlockClassifier, classify_block};
pub use split::split_blocks;
pub use types::{Block, RenderNode};
