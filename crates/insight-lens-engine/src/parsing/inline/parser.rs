use super::{cursor::Cursor, kinds::Emphasis, types::InlineSpan};

/// Parses paragraph text into a sequence of [`InlineSpan`]s.
///
/// Splits on every `**`, alternating plain and emphasized runs starting
/// with plain. This is a naive alternating split: no nesting, no escapes,
/// and a delimiter is recognised anywhere, including inside words.
///
/// Empty plain runs are dropped. An empty emphasized run (`****`) is kept
/// when it is closed, so that [`InlineSpan::rejoin`] reproduces every input
/// with an even delimiter count.
///
/// # Unterminated emphasis
/// With an odd delimiter count the text after the last `**` is emitted as
/// `Emphasized`, exactly as parity assigns it. `"a **b"` yields
/// `[PlainText("a "), Emphasized("b")]`.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut run_start = cur.pos();
    let mut emphasized = false;

    fn flush(out: &mut Vec<InlineSpan>, text: &str, emphasized: bool, closed: bool) {
        if emphasized {
            if closed || !text.is_empty() {
                out.push(InlineSpan::emphasized(text));
            }
        } else if !text.is_empty() {
            out.push(InlineSpan::plain(text));
        }
    }

    while !cur.eof() {
        if cur.starts_with(Emphasis::DELIM) {
            flush(&mut out, &s[run_start..cur.pos()], emphasized, true);
            cur.bump_n(Emphasis::DELIM.len());
            run_start = cur.pos();
            emphasized = !emphasized;
            continue;
        }
        cur.bump();
    }

    flush(&mut out, &s[run_start..], emphasized, false);
    out
}
