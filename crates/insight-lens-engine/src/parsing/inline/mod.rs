//! # Inline Parsing
//!
//! Extracts emphasis runs from paragraph text.
//!
//! ## Architecture
//!
//! Inline parsing runs only on blocks the classifier leaves as paragraphs.
//! Headings and numbered items have their delimiters stripped instead.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (PlainText, Emphasized)
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`parser`**: `parse_inline()` main entry point

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::InlineSpan;
