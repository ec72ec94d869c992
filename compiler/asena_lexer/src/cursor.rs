//! Byte cursor over the source buffer.
//!
//! Reads past the end return `0`, so scanning loops terminate on the
//! implicit sentinel without separate bounds checks. A `0` inside the
//! source is told apart from the end by [`Cursor::is_eof`].

/// Position within a source buffer. `Copy`, so a scanner can save and
/// restore it for short lookahead.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
}

fn len_u32(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    #[inline]
    pub(crate) fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos as usize >= self.source.len()
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Source text from the cursor to the end.
    pub(crate) fn rest(&self) -> &'a str {
        self.source.get(self.pos as usize..).unwrap_or("")
    }

    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Width in bytes of the UTF-8 character led by `byte`.
    #[inline]
    pub(crate) fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Step over one whole character.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Move to the next `\n` (or `\r`) without consuming it, or to EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest().as_bytes();
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(offset) => self.pos += len_u32(offset),
            None => self.pos = len_u32(self.source.len()),
        }
    }

    /// Skip ordinary string content up to the next `"`, `\`, `\n` or `\r`.
    /// Returns that byte, or `0` at EOF.
    pub(crate) fn skip_to_string_delim(&mut self) -> u8 {
        let rest = self.rest().as_bytes();
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let cr = memchr::memchr(b'\r', rest);
        let offset = match (primary, cr) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        };
        match offset {
            Some(offset) => {
                self.pos += len_u32(offset);
                self.current()
            }
            None => {
                self.pos = len_u32(self.source.len());
                0
            }
        }
    }
}
