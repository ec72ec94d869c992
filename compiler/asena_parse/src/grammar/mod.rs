//! Grammar Modules
//!
//! Parsing implementations for asena syntax constructs.
//!
//! # Organization
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`attr`]: Attributes (`@inline`, `@derive(Show)`)
//! - [`decl`]: Declarations (`use`, `#command`, `data`/`class`/`trait`,
//!   signatures, clauses) and argument lists
//! - [`stmt`]: Statements and blocks
//! - [`pattern`]: Patterns
//! - [`expr`]: Expressions, from lambdas down to primaries
//!
//! # Design
//!
//! The parser uses recursive descent with these patterns:
//!
//! - **Context flags**: `ParseContext` carries the position-dependent
//!   choices (type position, trailing blocks, lambda parameter lists)
//! - **Bounded lookahead**: token-only scans in `lookahead` pick between
//!   derivations before anything is built
//! - **Error recovery**: a failed statement or declaration resynchronizes at
//!   the next line break and leaves an error node behind

mod attr;
mod decl;
mod expr;
mod pattern;
mod stmt;

use asena_diagnostic::ErrorCode;
use asena_ir::ast::{ExprId, Ident, Literal, Param, Path};
use asena_ir::{Span, TokenKind, TokenTag};

use crate::{ParseContext, ParseError, Parser, TokenSet};

/// Tokens that can start a name.
const NAME_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::SymbolIdent);

/// The literal a token spells, if any.
fn literal(kind: TokenKind) -> Option<Literal> {
    match kind {
        TokenKind::Number(num) => Some(Literal::Number(num)),
        TokenKind::String(s) => Some(Literal::String(s)),
        TokenKind::Char(c) => Some(Literal::Char(c)),
        _ => None,
    }
}

impl Parser<'_> {
    #[inline]
    fn check_name(&self) -> bool {
        NAME_START.contains(self.cursor.current_tag())
    }

    /// An identifier or backtick symbol.
    fn parse_ident(&mut self) -> Result<Ident, ParseError> {
        let token = self.cursor.current();
        match token.kind.name() {
            Some(name) => {
                self.cursor.advance();
                Ok(Ident::new(name, token.span))
            }
            None => Err(ParseError::expected(
                ErrorCode::E1004,
                "a name",
                token,
                NAME_START,
            )),
        }
    }

    /// `a.b.c`, taking every `.name` that follows.
    fn parse_path(&mut self) -> Result<Path, ParseError> {
        let mut path = Path::new(self.parse_ident()?);
        while self.cursor.check(TokenTag::Dot) && NAME_START.contains(self.cursor.peek_tag(1)) {
            self.cursor.advance();
            path.push(self.parse_ident()?);
        }
        Ok(path)
    }

    /// A type: an expression parsed in type position.
    fn parse_type(&mut self) -> Result<ExprId, ParseError> {
        let context = self.context.with(ParseContext::IN_TYPE);
        self.with_context(context, Self::parse_expr)
    }

    /// `pattern [: type]` in an argument list, lambda or Pi/Sigma domain.
    fn parse_param(&mut self) -> Result<Param, ParseError> {
        let pattern = self.parse_pattern()?;
        let start = self.arena.pattern(pattern).span;
        let ty = if self.cursor.eat(TokenTag::Colon).is_some() {
            Some(self.parse_type()?)
        } else {
            None
        };
        Ok(Param {
            pattern,
            ty,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// Parameters of a `(...)` or `[...]` group at the cursor. Returns the
    /// parameters and the span of the group, brackets included.
    fn parse_param_group(&mut self, non_empty: bool) -> Result<(Vec<Param>, Span), ParseError> {
        let group = self.open_group();
        let close = group.close;
        if non_empty && self.cursor.check(close) {
            return Err(ParseError::expected(
                ErrorCode::E1008,
                "a parameter",
                self.cursor.current(),
                pattern::PATTERN_START,
            ));
        }
        let context = self.context.nested();
        let (params, _) = self.with_context(context, |p| p.comma_list(close, Self::parse_param))?;
        let span = self.close(group)?;
        Ok((params, span))
    }
}
