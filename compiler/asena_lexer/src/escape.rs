//! Escape decoding for string and character literal bodies.
//!
//! Escapes never fail: `\n`, `\t`, `\r` and `\0` have their usual meaning
//! and any other escaped character stands for itself, so `\"`, `\'` and
//! `\\` fall out of the same rule.

/// Decode one escaped character (the byte after `\`).
#[inline]
fn resolve_escape(c: char) -> char {
    match c {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}

/// Decode the body of a string literal (without the surrounding quotes).
///
/// A dangling `\` at the very end is kept literally; the scanner reports
/// such strings as unterminated before they reach here.
pub fn unescape_string(content: &str) -> String {
    if !content.contains('\\') {
        return content.to_owned();
    }

    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(esc) => result.push(resolve_escape(esc)),
                None => result.push('\\'),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Decode the body of a character literal (without the quotes).
///
/// Returns `None` for an empty body.
pub fn unescape_char(content: &str) -> Option<char> {
    let mut chars = content.chars();
    match chars.next()? {
        '\\' => Some(chars.next().map_or('\\', resolve_escape)),
        c => Some(c),
    }
}
