//! Token cursor for navigating the token stream.
//!
//! Besides position and lookahead, the cursor owns line-break
//! significance: inside `(...)` and `[...]` line breaks are layout only,
//! and [`Cursor::advance`] steps over them on its own.

use asena_ir::{Span, Token, TokenKind, TokenList, TokenTag};

pub(crate) struct Cursor<'a> {
    tokens: &'a TokenList,
    pos: usize,
    /// Span of the last consumed token that was not a line break.
    prev_span: Span,
    /// Line breaks are insignificant at this nesting level.
    skip_breaks: bool,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(tokens: &'a TokenList) -> Self {
        debug_assert!(
            tokens.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens,
            pos: 0,
            prev_span: Span::DUMMY,
            skip_breaks: false,
        }
    }

    pub(crate) fn tokens(&self) -> &'a TokenList {
        self.tokens
    }

    #[inline]
    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    /// The current token. Past the end this is the final `Eof`.
    #[inline]
    pub(crate) fn current(&self) -> Token {
        match self.tokens.get(self.pos).or_else(|| self.tokens.last()) {
            Some(token) => *token,
            None => Token::new(TokenKind::Eof, Span::DUMMY),
        }
    }

    #[inline]
    pub(crate) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub(crate) fn current_tag(&self) -> TokenTag {
        self.tokens.tag(self.pos)
    }

    #[inline]
    pub(crate) fn current_span(&self) -> Span {
        self.current().span
    }

    /// Span of the last consumed significant token.
    #[inline]
    pub(crate) fn previous_span(&self) -> Span {
        self.prev_span
    }

    /// Tag `offset` tokens ahead of the current one.
    #[inline]
    pub(crate) fn peek_tag(&self, offset: usize) -> TokenTag {
        self.tokens.tag(self.pos + offset)
    }

    #[inline]
    pub(crate) fn check(&self, tag: TokenTag) -> bool {
        self.current_tag() == tag
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.check(TokenTag::Eof)
    }

    /// Consume the current token and return it. Never moves past `Eof`.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.current();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            if token.kind != TokenKind::LineBreak {
                self.prev_span = token.span;
            }
        }
        if self.skip_breaks {
            self.skip_line_breaks();
        }
        token
    }

    /// Consume the current token if it has tag `tag`.
    pub(crate) fn eat(&mut self, tag: TokenTag) -> Option<Span> {
        if self.check(tag) {
            Some(self.advance().span)
        } else {
            None
        }
    }

    pub(crate) fn skip_line_breaks(&mut self) {
        while self.check(TokenTag::LineBreak) {
            self.pos += 1;
        }
    }

    /// Whether the next significant token (past any line break) has `tag`.
    pub(crate) fn check_past_line_break(&self, tag: TokenTag) -> bool {
        if self.check(TokenTag::LineBreak) {
            self.peek_tag(1) == tag
        } else {
            self.check(tag)
        }
    }

    /// Set line-break significance for the level being entered and return
    /// the previous setting for [`Cursor::restore_breaks`].
    pub(crate) fn set_skip_breaks(&mut self, skip: bool) -> bool {
        std::mem::replace(&mut self.skip_breaks, skip)
    }

    pub(crate) fn restore_breaks(&mut self, saved: bool) {
        self.skip_breaks = saved;
    }

    pub(crate) fn skips_breaks(&self) -> bool {
        self.skip_breaks
    }
}

#[cfg(test)]
mod tests {
    use asena_ir::StringInterner;
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(source: &str) -> TokenList {
        let mut interner = StringInterner::new();
        asena_lexer::lex(source, &mut interner).tokens
    }

    #[test]
    fn navigation() {
        let tokens = tokens("a b\nc");
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.current_tag(), TokenTag::Ident);
        assert_eq!(cursor.peek_tag(2), TokenTag::LineBreak);
        cursor.advance();
        let b = cursor.advance();
        assert_eq!(cursor.previous_span(), b.span);
        assert!(cursor.check(TokenTag::LineBreak));
        cursor.advance();
        assert_eq!(cursor.previous_span(), b.span);
        cursor.advance();
        assert!(cursor.is_at_end());
        cursor.advance();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn skipping_level_steps_over_breaks() {
        let tokens = tokens("( a\n\n b )");
        let mut cursor = Cursor::new(&tokens);
        let saved = cursor.set_skip_breaks(true);
        assert!(!saved);
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.current_tag(), TokenTag::Ident);
        cursor.restore_breaks(saved);
        assert!(!cursor.skips_breaks());
    }

    #[test]
    fn eat_and_peek_past_break() {
        let tokens = tokens("x\nelse");
        let mut cursor = Cursor::new(&tokens);
        assert!(cursor.eat(TokenTag::Colon).is_none());
        assert!(cursor.eat(TokenTag::Ident).is_some());
        assert!(cursor.check_past_line_break(TokenTag::Else));
        assert!(!cursor.check(TokenTag::Else));
    }
}
