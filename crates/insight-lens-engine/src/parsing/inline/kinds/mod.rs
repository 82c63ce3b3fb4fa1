//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Emphasis`**: `DELIM = b"**"` - toggles between plain and emphasized text
//!
//! ## Design Principle
//!
//! All delimiter constants live here, not scattered in parser code.
//! The parser and the block classifier call these constants; they never
//! hardcode `**`.

pub mod emphasis;

pub use emphasis::Emphasis;
