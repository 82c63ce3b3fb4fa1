//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders blocks and nodes as a stable text outline (`Snap`)
//!   for `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds and
//!   ordered, full coverage of non-blank text, deterministic classification,
//!   paragraph round-trip)
//!
//! ## Testing Strategy
//!
//! Fixture answers are real-shaped generator output. Snapshots pin the node
//! kinds, spans and extracted fields; invariants run over every fixture.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{Snap, normalize};
