use crate::parsing::inline::kinds::Emphasis;

/// Section heading block type with owned markers.
///
/// The answer generator writes headings as a bold run ending in a colon,
/// e.g. `**Key Findings:**` or `**Geographic Concentration**:`. Only the
/// first form is a heading; the second is a paragraph that opens with a
/// bold label.
pub struct Heading;

impl Heading {
    /// The closing marker that must appear after the opening delimiter.
    pub const CLOSE: &'static str = ":**";

    /// The trailing character stripped from the heading text.
    pub const TRAILING_COLON: char = ':';

    /// Returns true if `block` opens with `**` and has a `:**` after it.
    pub fn matches(block: &str) -> bool {
        block
            .strip_prefix(Emphasis::DELIM_STR)
            .is_some_and(|rest| rest.contains(Self::CLOSE))
    }

    /// Extracts the heading text: delimiters removed, one trailing colon
    /// removed, surrounding whitespace trimmed.
    ///
    /// Trailing whitespace is trimmed before the colon is looked for, so a
    /// colon followed by stray spaces or an empty `**` pair is still
    /// stripped: `**Key Findings:** **` gives `Key Findings`, not
    /// `Key Findings:`.
    pub fn text(block: &str) -> String {
        let stripped = Emphasis::strip(block);
        let stripped = stripped.trim_end();
        stripped
            .strip_suffix(Self::TRAILING_COLON)
            .unwrap_or(stripped)
            .trim()
            .to_string()
    }
}
