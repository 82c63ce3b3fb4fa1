use crate::parsing::inline::kinds::Emphasis;

/// Numbered recommendation block type with owned separators.
///
/// Items look like `1. **Immediate Action**: Launch a campaign`. The digit
/// run is the ordinal, the text up to the first colon is the title and the
/// rest is the body.
pub struct NumberedItem;

/// The parts of a numbered item block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemParts<'a> {
    pub ordinal: &'a str,
    pub title: String,
    pub body: &'a str,
}

impl NumberedItem {
    /// Terminates the ordinal digit run.
    pub const ORDINAL_TERMINATOR: char = '.';

    /// Separates the title from the body. Only the first one counts.
    pub const TITLE_SEPARATOR: char = ':';

    /// Splits a leading `<digits>.` off `block`.
    ///
    /// Returns `(ordinal, rest)` where `rest` is everything after the period,
    /// or `None` if the block does not start with ASCII digits immediately
    /// followed by a period.
    pub fn split_ordinal(block: &str) -> Option<(&str, &str)> {
        let digits = block.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            return None;
        }
        let rest = block[digits..].strip_prefix(Self::ORDINAL_TERMINATOR)?;
        Some((&block[..digits], rest))
    }

    /// Parses `block` into ordinal, title and body.
    ///
    /// Without a title separator the title is empty and the whole remainder
    /// becomes the body. A title containing a colon is cut at that colon.
    pub fn parse(block: &str) -> Option<ItemParts<'_>> {
        let (ordinal, rest) = Self::split_ordinal(block)?;
        let parts = match rest.split_once(Self::TITLE_SEPARATOR) {
            Some((title, body)) => ItemParts {
                ordinal,
                title: Emphasis::strip(title).trim().to_string(),
                body: body.trim(),
            },
            None => ItemParts {
                ordinal,
                title: String::new(),
                body: rest.trim(),
            },
        };
        Some(parts)
    }
}
