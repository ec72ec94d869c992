//! Allocation-free scanner producing `(RawTag, len)` pairs.
//!
//! The scanner decides token boundaries only. It does not intern, decode
//! escapes, resolve keywords or split numeric suffixes from digits; the
//! cooking pass does all of that from the token's text.

use asena_ir::NumSuffix;

use crate::cursor::Cursor;

/// Boundary-level classification of a lexeme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum RawTag {
    Whitespace,
    /// `\n` or `\r\n`
    Newline,
    Semicolon,
    LineComment,
    DocComment,
    Ident,
    /// `` ` `` followed by symbol characters.
    SymbolIdent,
    /// A run of symbol characters.
    Symbols,
    /// Decimal integer, possibly suffixed.
    Decimal,
    /// Decimal with a fractional part, possibly suffixed.
    Float,
    Hex,
    Octal,
    Binary,
    String,
    UnterminatedString,
    Char,
    UnterminatedChar,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    At,
    Hash,
    /// Bytes that start no rule, grouped into one run.
    Unknown,
    Eof,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}

/// `$ ? . + - * / % ^ & | ! ~ = < >`
#[inline]
pub(crate) fn is_symbol(b: u8) -> bool {
    matches!(
        b,
        b'$' | b'?'
            | b'.'
            | b'+'
            | b'-'
            | b'*'
            | b'/'
            | b'%'
            | b'^'
            | b'&'
            | b'|'
            | b'!'
            | b'~'
            | b'='
            | b'<'
            | b'>'
    )
}

#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'\''
}

#[inline]
pub(crate) fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'_' | b'\'' | b'$')
}

/// Which suffixes a mantissa may take.
#[derive(Clone, Copy, PartialEq, Eq)]
enum NumberShape {
    /// `0x`, `0o`, `0b`: integer suffixes only.
    Prefixed,
    /// Plain decimal digits: any suffix.
    Integral,
    /// Digits with a fractional part: `f32` or `f64` only.
    Fractional,
}

pub(crate) struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        RawScanner { cursor }
    }

    pub(crate) fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Produce the next raw token. Returns `Eof` with `len == 0` forever
    /// once the source is exhausted.
    pub(crate) fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        if self.cursor.is_eof() {
            return RawToken {
                tag: RawTag::Eof,
                len: 0,
            };
        }
        let tag = match self.cursor.current() {
            b' ' | b'\t' | 0x0B | 0x0C => self.whitespace(),
            b'\r' if self.cursor.peek() == b'\n' => {
                self.cursor.advance_n(2);
                RawTag::Newline
            }
            b'\r' => self.whitespace(),
            b'\n' => self.single(RawTag::Newline),
            b';' => self.single(RawTag::Semicolon),
            b'\'' => self.quote(),
            b if is_ident_start(b) => self.identifier(),
            b'0'..=b'9' => self.number(),
            b'"' => self.string(),
            b'`' => self.backtick(),
            b'/' if self.cursor.peek() == b'/' => self.comment(),
            b if is_symbol(b) => self.symbols(),
            b'(' => self.single(RawTag::LParen),
            b')' => self.single(RawTag::RParen),
            b'[' => self.single(RawTag::LBracket),
            b']' => self.single(RawTag::RBracket),
            b'{' => self.single(RawTag::LBrace),
            b'}' => self.single(RawTag::RBrace),
            b',' => self.single(RawTag::Comma),
            b':' => self.single(RawTag::Colon),
            b'@' => self.single(RawTag::At),
            b'#' => self.single(RawTag::Hash),
            _ => self.unknown(),
        };
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }

    #[inline]
    fn single(&mut self, tag: RawTag) -> RawTag {
        self.cursor.advance();
        tag
    }

    /// Horizontal whitespace. A `\r` directly before `\n` is left for
    /// the newline.
    fn whitespace(&mut self) -> RawTag {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | 0x0B | 0x0C => self.cursor.advance(),
                b'\r' if self.cursor.peek() != b'\n' => self.cursor.advance(),
                _ => break,
            }
        }
        RawTag::Whitespace
    }

    // ─── Names ─────────────────────────────────────────────────────────

    fn identifier(&mut self) -> RawTag {
        self.cursor.advance();
        self.cursor.eat_while(is_ident_continue);
        RawTag::Ident
    }

    /// `'c'` and `'\c'` are characters unless an identifier character
    /// follows the closing quote; anything else starting with `'` is an
    /// identifier.
    fn quote(&mut self) -> RawTag {
        let mut ahead = self.cursor;
        ahead.advance();
        match ahead.current() {
            b'\\' => {
                ahead.advance();
                if ahead.is_eof() || matches!(ahead.current(), b'\n' | b'\r') {
                    self.cursor = ahead;
                    return RawTag::UnterminatedChar;
                }
                ahead.advance_char();
                if ahead.current() == b'\'' {
                    ahead.advance();
                    self.cursor = ahead;
                    RawTag::Char
                } else {
                    self.cursor = ahead;
                    RawTag::UnterminatedChar
                }
            }
            b'\'' | b'\n' | b'\r' => self.identifier(),
            _ if ahead.is_eof() => self.identifier(),
            _ => {
                ahead.advance_char();
                if ahead.current() == b'\'' && !is_ident_continue(ahead.peek()) {
                    ahead.advance();
                    self.cursor = ahead;
                    RawTag::Char
                } else {
                    self.identifier()
                }
            }
        }
    }

    fn backtick(&mut self) -> RawTag {
        self.cursor.advance();
        if is_symbol(self.cursor.current()) {
            self.cursor.eat_while(is_symbol);
            RawTag::SymbolIdent
        } else {
            RawTag::Unknown
        }
    }

    /// A symbol run stops before `//` so a trailing comment is not
    /// swallowed into an operator.
    fn symbols(&mut self) -> RawTag {
        while is_symbol(self.cursor.current())
            && !(self.cursor.current() == b'/' && self.cursor.peek() == b'/')
        {
            self.cursor.advance();
        }
        RawTag::Symbols
    }

    fn comment(&mut self) -> RawTag {
        let tag = if self.cursor.peek2() == b'!' {
            RawTag::DocComment
        } else {
            RawTag::LineComment
        };
        self.cursor.eat_until_newline_or_eof();
        tag
    }

    // ─── Literals ──────────────────────────────────────────────────────

    fn number(&mut self) -> RawTag {
        if self.cursor.current() == b'0' {
            let base = match self.cursor.peek() {
                b'x' | b'X' if self.cursor.peek2().is_ascii_hexdigit() => Some(RawTag::Hex),
                b'o' | b'O' if matches!(self.cursor.peek2(), b'0'..=b'7') => Some(RawTag::Octal),
                b'b' | b'B' if matches!(self.cursor.peek2(), b'0' | b'1') => Some(RawTag::Binary),
                _ => None,
            };
            if let Some(tag) = base {
                self.cursor.advance_n(2);
                match tag {
                    RawTag::Hex => self.cursor.eat_while(|b| b.is_ascii_hexdigit()),
                    RawTag::Octal => self.cursor.eat_while(|b| matches!(b, b'0'..=b'7')),
                    _ => self.cursor.eat_while(|b| matches!(b, b'0' | b'1')),
                }
                self.suffix(NumberShape::Prefixed);
                return tag;
            }
        }

        self.cursor.eat_while(|b| b.is_ascii_digit());
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance();
            self.cursor.eat_while(|b| b.is_ascii_digit());
            self.suffix(NumberShape::Fractional);
            RawTag::Float
        } else {
            self.suffix(NumberShape::Integral);
            RawTag::Decimal
        }
    }

    /// Consume the longest precision suffix at the cursor, if the mantissa
    /// can carry it.
    fn suffix(&mut self, shape: NumberShape) {
        let allow_float = shape != NumberShape::Prefixed;
        let Some(suffix) = NumSuffix::longest_prefix_of(self.cursor.rest(), allow_float) else {
            return;
        };
        if shape == NumberShape::Fractional && !suffix.is_float() {
            return;
        }
        let width = u32::try_from(suffix.as_str().len()).unwrap_or(0);
        self.cursor.advance_n(width);
    }

    fn string(&mut self) -> RawTag {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance();
                    return RawTag::String;
                }
                b'\\' => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), b'\n' | b'\r') || self.cursor.is_eof() {
                        return RawTag::UnterminatedString;
                    }
                    self.cursor.advance_char();
                }
                _ => return RawTag::UnterminatedString,
            }
        }
    }

    fn unknown(&mut self) -> RawTag {
        self.cursor.advance_char();
        while !self.cursor.is_eof() && starts_nothing(self.cursor.current()) {
            self.cursor.advance_char();
        }
        RawTag::Unknown
    }
}

/// Bytes that begin no lexical rule.
fn starts_nothing(b: u8) -> bool {
    !(b.is_ascii_alphanumeric()
        || is_symbol(b)
        || matches!(
            b,
            b' ' | b'\t'
                | 0x0B
                | 0x0C
                | b'\r'
                | b'\n'
                | b';'
                | b'\''
                | b'_'
                | b'"'
                | b'`'
                | b'('
                | b')'
                | b'['
                | b']'
                | b'{'
                | b'}'
                | b','
                | b':'
                | b'@'
                | b'#'
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(source: &str) -> Vec<(RawTag, u32)> {
        let mut scanner = RawScanner::new(Cursor::new(source));
        let mut out = Vec::new();
        loop {
            let token = scanner.next_token();
            if token.tag == RawTag::Eof {
                return out;
            }
            out.push((token.tag, token.len));
        }
    }

    #[test]
    fn crlf_is_one_newline() {
        assert_eq!(
            scan("a \r\n"),
            vec![
                (RawTag::Ident, 1),
                (RawTag::Whitespace, 1),
                (RawTag::Newline, 2)
            ]
        );
    }

    #[test]
    fn doc_and_line_comments() {
        assert_eq!(scan("//! d"), vec![(RawTag::DocComment, 5)]);
        assert_eq!(scan("// c"), vec![(RawTag::LineComment, 4)]);
    }

    #[test]
    fn number_boundaries() {
        assert_eq!(scan("12u8"), vec![(RawTag::Decimal, 4)]);
        assert_eq!(scan("0x1Fu8"), vec![(RawTag::Hex, 6)]);
        assert_eq!(scan("0xf64"), vec![(RawTag::Hex, 5)]);
        assert_eq!(scan("3.0f64"), vec![(RawTag::Float, 6)]);
        assert_eq!(
            scan("0o9"),
            vec![(RawTag::Decimal, 1), (RawTag::Ident, 2)]
        );
    }

    #[test]
    fn quote_forms() {
        assert_eq!(scan("'x'"), vec![(RawTag::Char, 3)]);
        assert_eq!(scan(r"'\''"), vec![(RawTag::Char, 4)]);
        assert_eq!(scan("'x'y"), vec![(RawTag::Ident, 4)]);
        assert_eq!(scan("'xs"), vec![(RawTag::Ident, 3)]);
    }

    #[test]
    fn strings_with_escapes() {
        assert_eq!(scan(r#""a\"b""#), vec![(RawTag::String, 6)]);
        assert_eq!(scan("\"a\\"), vec![(RawTag::UnterminatedString, 3)]);
    }
}
