//! Pattern parsing.
//!
//! ```text
//! pattern        := path atomic_pattern* | atomic_pattern
//! atomic_pattern := path | literal | '..' | '(' pattern ')'
//! ```
//!
//! A constructor pattern takes the longest path it can; `Some.x y` is the
//! constructor `Some.x` applied to `y`, never a field access.

use asena_diagnostic::ErrorCode;
use asena_ir::ast::{Pattern, PatternId, PatternKind};
use asena_ir::TokenTag;
use asena_stack::ensure_sufficient_stack;

use super::literal;
use crate::{ParseContext, ParseError, Parser, TokenSet};

/// Tokens that can start an atomic pattern.
pub(super) const PATTERN_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::SymbolIdent)
    .with(TokenTag::Number)
    .with(TokenTag::String)
    .with(TokenTag::Char)
    .with(TokenTag::DotDot)
    .with(TokenTag::LParen);

impl Parser<'_> {
    pub(super) fn parse_pattern(&mut self) -> Result<PatternId, ParseError> {
        let context = self.context.with(ParseContext::IN_PATTERN);
        self.with_context(context, |p| ensure_sufficient_stack(|| p.parse_pattern_inner()))
    }

    fn parse_pattern_inner(&mut self) -> Result<PatternId, ParseError> {
        if !self.check_name() {
            return self.parse_atomic_pattern();
        }
        let path = self.parse_path()?;
        let mut args = Vec::new();
        while PATTERN_START.contains(self.cursor.current_tag()) {
            args.push(self.parse_atomic_pattern()?);
        }
        let span = path.span.merge(self.cursor.previous_span());
        Ok(self
            .arena
            .alloc_pattern(Pattern::new(PatternKind::Cons { path, args }, span)))
    }

    /// A pattern that needs no parentheses to be an argument: a bare path,
    /// a literal, `..`, or a parenthesized pattern.
    pub(super) fn parse_atomic_pattern(&mut self) -> Result<PatternId, ParseError> {
        let token = self.cursor.current();
        if let Some(lit) = literal(token.kind) {
            self.cursor.advance();
            return Ok(self
                .arena
                .alloc_pattern(Pattern::new(PatternKind::Literal(lit), token.span)));
        }
        match self.cursor.current_tag() {
            TokenTag::Ident | TokenTag::SymbolIdent => {
                let path = self.parse_path()?;
                let span = path.span;
                Ok(self.arena.alloc_pattern(Pattern::new(
                    PatternKind::Cons {
                        path,
                        args: Vec::new(),
                    },
                    span,
                )))
            }
            TokenTag::DotDot => {
                self.cursor.advance();
                Ok(self
                    .arena
                    .alloc_pattern(Pattern::new(PatternKind::Rest, token.span)))
            }
            TokenTag::LParen => {
                let group = self.open_group();
                let context = self.context.nested().with(ParseContext::IN_PATTERN);
                let inner = self.with_context(context, Self::parse_pattern)?;
                self.close(group)?;
                Ok(inner)
            }
            _ => Err(ParseError::expected(
                ErrorCode::E1008,
                "a pattern",
                token,
                PATTERN_START,
            )),
        }
    }
}
