use crate::domain::traits::MarkupEscaper;
use std::fmt::Write;

/// HTML-escapes text and forces it into printable 7-bit ASCII.
///
/// `& < > " '` become named/hex entities; control characters and every
/// code point above `~` become decimal references (`&#128512;`).
pub struct AsciiHtmlEscaper;

impl MarkupEscaper for AsciiHtmlEscaper {
    fn escape(&self, text: &str) -> String {
        let escaped = html_escape::encode_quoted_attribute(text);
        to_ascii_char_refs(&escaped)
    }
}

fn to_ascii_char_refs(text: &str) -> String {
    if text.bytes().all(is_printable_ascii) {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + 16);
    for ch in text.chars() {
        if ch.is_ascii() && is_printable_ascii(ch as u8) {
            out.push(ch);
        } else {
            // Writing into a String cannot fail.
            let _ = write!(out, "&#{};", ch as u32);
        }
    }
    out
}

fn is_printable_ascii(b: u8) -> bool {
    (b' '..=b'~').contains(&b)
}
