//! Primary expression parsing.
//!
//! Literals, names and paths, parenthesized tuples, arrays, `if`/`match`/
//! `return` forms and lambdas.

use asena_diagnostic::ErrorCode;
use asena_ir::ast::{Body, Expr, ExprId, ExprKind, IfExpr, MatchArm};
use asena_ir::{TokenKind, TokenTag};
use tracing::trace;

use crate::grammar::literal;
use crate::{ParseContext, ParseError, Parser, TokenSet};

/// Tokens that can start an expression.
const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenTag::Ident)
    .with(TokenTag::SymbolIdent)
    .with(TokenTag::Number)
    .with(TokenTag::String)
    .with(TokenTag::Char)
    .with(TokenTag::LParen)
    .with(TokenTag::LBracket)
    .with(TokenTag::If)
    .with(TokenTag::Match)
    .with(TokenTag::Return)
    .with(TokenTag::Pipe);

impl Parser<'_> {
    pub(crate) fn parse_primary(&mut self) -> Result<ExprId, ParseError> {
        let token = self.cursor.current();
        trace!(token = %token.kind.tag(), at = ?token.span, "primary");

        if let Some(lit) = literal(token.kind) {
            self.cursor.advance();
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Literal(lit), token.span)));
        }
        match token.kind {
            TokenKind::Ident(_) | TokenKind::SymbolIdent(_) => {
                let path = self.parse_path()?;
                let span = path.span;
                let kind = if path.is_single() {
                    ExprKind::Ident(path.first().name)
                } else {
                    ExprKind::Path(path)
                };
                Ok(self.arena.alloc_expr(Expr::new(kind, span)))
            }
            TokenKind::LParen => self.parse_tuple(),
            TokenKind::LBracket => self.parse_array(),
            TokenKind::If => self.parse_if_expr(),
            TokenKind::Match => self.parse_match(),
            TokenKind::Return => self.parse_return(),
            _ if self.at_lambda() => self.parse_lambda(),
            TokenKind::Error(lex) => Err(ParseError::lexical(lex, token.span)),
            _ => Err(ParseError::expected(
                ErrorCode::E1002,
                "an expression",
                token,
                EXPR_START,
            )),
        }
    }

    /// `|` or `||` at the start of an expression.
    fn at_lambda(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::Pipe => true,
            TokenKind::Operator(name) => self.interner.lookup(name) == "||",
            _ => false,
        }
    }

    /// `(a, b)`, `(a,)`, `(a)` or `()`.
    fn parse_tuple(&mut self) -> Result<ExprId, ParseError> {
        let group = self.open_group();
        let context = self.context.nested();
        let (elements, trailing_comma) =
            self.with_context(context, |p| p.comma_list(TokenTag::RParen, Self::parse_expr))?;
        let span = self.close(group)?;
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Tuple {
                elements,
                trailing_comma,
            },
            span,
        )))
    }

    fn parse_array(&mut self) -> Result<ExprId, ParseError> {
        let group = self.open_group();
        let context = self.context.nested();
        let (elements, _) =
            self.with_context(context, |p| p.comma_list(TokenTag::RBracket, Self::parse_expr))?;
        let span = self.close(group)?;
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Array(elements), span)))
    }

    /// `if` in expression position: the `else` branch is required.
    fn parse_if_expr(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let cond = self.with_context(self.head_context(), Self::parse_expr)?;
        let then_branch = self.parse_then_body()?;
        let Some(else_branch) = self.parse_else_body()? else {
            return Err(
                ParseError::missing_else(start.merge(self.cursor.previous_span()))
                    .with_context("an if expression"),
            );
        };
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::If(Box::new(IfExpr {
                cond,
                then_branch,
                else_branch,
            })),
            span,
        )))
    }

    /// `{ ... }` or `then expr`.
    pub(crate) fn parse_then_body(&mut self) -> Result<Body, ParseError> {
        if self.cursor.check(TokenTag::LBrace) {
            return Ok(Body::Block(self.parse_block()?));
        }
        if self.cursor.eat(TokenTag::Then).is_some() {
            return Ok(Body::Expr(self.parse_expr()?));
        }
        Err(ParseError::unexpected(
            self.cursor.current(),
            TokenSet::new().with(TokenTag::Then).with(TokenTag::LBrace),
        ))
    }

    /// `else { ... }` or `else expr`, possibly on the next line. `None`
    /// when no `else` follows.
    pub(crate) fn parse_else_body(&mut self) -> Result<Option<Body>, ParseError> {
        if !self.cursor.check_past_line_break(TokenTag::Else) {
            return Ok(None);
        }
        self.cursor.skip_line_breaks();
        self.cursor.advance();
        let body = if self.cursor.check(TokenTag::LBrace) {
            Body::Block(self.parse_block()?)
        } else {
            Body::Expr(self.parse_expr()?)
        };
        Ok(Some(body))
    }

    /// `match scrutinee { pattern => body ... }`. Arms are separated by
    /// commas or line breaks; zero arms is allowed.
    fn parse_match(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let scrutinee = self.with_context(self.head_context(), Self::parse_expr)?;
        if !self.cursor.check(TokenTag::LBrace) {
            return Err(ParseError::unexpected(
                self.cursor.current(),
                TokenSet::single(TokenTag::LBrace),
            ));
        }
        let brace = self.open_brace();
        let arms = self.with_context(ParseContext::NONE, Self::parse_arms)?;
        let end = self.close(brace)?;
        Ok(self.arena.alloc_expr(Expr::new(
            ExprKind::Match { scrutinee, arms },
            start.merge(end),
        )))
    }

    fn parse_arms(&mut self) -> Result<Vec<MatchArm>, ParseError> {
        let mut arms = Vec::new();
        while !self.cursor.check(TokenTag::RBrace) && !self.cursor.is_at_end() {
            let pattern = self.parse_pattern()?;
            self.expect(TokenTag::FatArrow)?;
            self.cursor.skip_line_breaks();
            let body = if self.cursor.check(TokenTag::LBrace) {
                Body::Block(self.parse_block()?)
            } else {
                Body::Expr(self.parse_expr()?)
            };
            let span = self
                .arena
                .pattern(pattern)
                .span
                .merge(self.cursor.previous_span());
            arms.push(MatchArm {
                pattern,
                body,
                span,
            });

            let separated =
                self.cursor.eat(TokenTag::Comma).is_some() || self.cursor.check(TokenTag::LineBreak);
            self.cursor.skip_line_breaks();
            if !separated && !self.cursor.check(TokenTag::RBrace) {
                return Err(ParseError::unexpected(
                    self.cursor.current(),
                    TokenSet::new()
                        .with(TokenTag::Comma)
                        .with(TokenTag::RBrace)
                        .with(TokenTag::LineBreak),
                ));
            }
        }
        Ok(arms)
    }

    /// `return` with an optional value on the same line.
    fn parse_return(&mut self) -> Result<ExprId, ParseError> {
        let start = self.cursor.advance().span;
        let value = if EXPR_START.contains(self.cursor.current_tag()) || self.at_lambda() {
            Some(self.parse_expr()?)
        } else {
            None
        };
        let span = value.map_or(start, |v| start.merge(self.arena.expr(v).span));
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Return(value), span)))
    }

    /// `|params| body` or `|| body`. The body extends as far right as an
    /// expression can.
    fn parse_lambda(&mut self) -> Result<ExprId, ParseError> {
        let open = self.cursor.advance();
        let params = if open.kind == TokenKind::Pipe {
            let context = self.context.with(ParseContext::PIPE_IS_SEPARATOR);
            let (params, _) =
                self.with_context(context, |p| p.comma_list(TokenTag::Pipe, Self::parse_param))?;
            self.expect(TokenTag::Pipe)?;
            params
        } else {
            Vec::new()
        };
        let context = self.context.without(ParseContext::PIPE_IS_SEPARATOR);
        let body = self.with_context(context, Self::parse_expr)?;
        let span = open.span.merge(self.arena.expr(body).span);
        Ok(self
            .arena
            .alloc_expr(Expr::new(ExprKind::Lambda { params, body }, span)))
    }
}
