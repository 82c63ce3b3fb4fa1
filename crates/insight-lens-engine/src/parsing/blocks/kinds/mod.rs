pub mod heading;
pub mod numbered_item;
pub mod paragraph;

pub use heading::Heading;
pub use numbered_item::{ItemParts, NumberedItem};
pub use paragraph::Paragraph;
