/// Emphasis inline type with owned delimiter constant.
///
/// The answer format only has one inline construct: a `**` pair around
/// bold text. There is no nesting and no escaping.
pub struct Emphasis;

impl Emphasis {
    /// The two-byte marker that opens and closes emphasis.
    pub const DELIM: &'static [u8] = b"**";

    /// [`Self::DELIM`] as a string slice, for `str` APIs.
    pub const DELIM_STR: &'static str = "**";

    /// Returns `s` with every emphasis delimiter removed.
    pub fn strip(s: &str) -> String {
        s.replace(Self::DELIM_STR, "")
    }

    /// Wraps `s` in emphasis delimiters.
    pub fn wrap(s: &str) -> String {
        format!("{}{s}{}", Self::DELIM_STR, Self::DELIM_STR)
    }

    /// Counts delimiter occurrences in `s`.
    ///
    /// An even count means every emphasis run is closed.
    pub fn count(s: &str) -> usize {
        s.matches(Self::DELIM_STR).count()
    }
}
