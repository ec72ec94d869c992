//! Expression parsing.
//!
//! This module extends Parser with methods for parsing expressions, from
//! the loosest-binding forms down to application.
//!
//! # Module Structure
//!
//! - `mod.rs`: Entry point (`parse_expr`), Pi/Sigma, ascription, binary
//!   chains and application
//! - `primary.rs`: Literals, names, groups, `if`, `match`, `return`, lambdas
//!
//! # Binding
//!
//! From loosest to tightest:
//!
//! ```text
//! expr   := '(' params ')' '->' expr        Pi with named domain
//!         | '[' params ']' '->' expr        Sigma
//!         | binary '->' expr                Pi with bare domain
//!         | binary ':' type                 ascription
//!         | binary
//! binary := app (op app)*                   flat, left-associative
//! app    := primary primary* [block]
//! ```
//!
//! Every operator spelling shares one precedence level: `a + b * c` is
//! `(a + b) * c`.

mod primary;

use asena_ir::ast::{Expr, ExprId, ExprKind, OpToken, PiDomain};
use asena_ir::{TokenKind, TokenTag};
use asena_stack::ensure_sufficient_stack;

use crate::{ParseContext, ParseError, Parser};

impl Parser<'_> {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expr(&mut self) -> Result<ExprId, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<ExprId, ParseError> {
        let tag = self.cursor.current_tag();
        if matches!(tag, TokenTag::LParen | TokenTag::LBracket) && self.arrow_after_group() {
            return self.parse_binder(tag == TokenTag::LBracket);
        }

        let lhs = self.parse_binary()?;
        let start = self.arena.expr(lhs).span;
        if self.cursor.eat(TokenTag::Arrow).is_some() {
            self.cursor.skip_line_breaks();
            let codomain = self.parse_expr()?;
            let span = start.merge(self.arena.expr(codomain).span);
            return Ok(self.arena.alloc_expr(Expr::new(
                ExprKind::Pi {
                    domain: PiDomain::Bare(lhs),
                    codomain,
                },
                span,
            )));
        }
        if self.cursor.eat(TokenTag::Colon).is_some() {
            let ty = self.parse_type()?;
            let span = start.merge(self.arena.expr(ty).span);
            return Ok(self
                .arena
                .alloc_expr(Expr::new(ExprKind::Ann { value: lhs, ty }, span)));
        }
        Ok(lhs)
    }

    /// `(x: A) -> B` or `[x: A] -> B`. The caller has checked that the
    /// group is followed by `->`.
    fn parse_binder(&mut self, is_sigma: bool) -> Result<ExprId, ParseError> {
        let (params, group_span) = self.parse_param_group(false)?;
        self.expect(TokenTag::Arrow)?;
        self.cursor.skip_line_breaks();
        let codomain = self.parse_expr()?;
        let span = group_span.merge(self.arena.expr(codomain).span);
        let kind = if is_sigma {
            ExprKind::Sigma { params, codomain }
        } else {
            ExprKind::Pi {
                domain: PiDomain::Params(params),
                codomain,
            }
        };
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// Left-associative chain of applications joined by operators.
    fn parse_binary(&mut self) -> Result<ExprId, ParseError> {
        let mut lhs = self.parse_application()?;
        while let Some(op) = self.binary_operator() {
            self.cursor.advance();
            self.cursor.skip_line_breaks();
            let rhs = self.parse_application()?;
            let span = self.arena.expr(lhs).span.merge(self.arena.expr(rhs).span);
            lhs = self
                .arena
                .alloc_expr(Expr::new(ExprKind::Binary { lhs, op, rhs }, span));
        }
        Ok(lhs)
    }

    /// The operator at the cursor, if it continues a binary chain.
    fn binary_operator(&mut self) -> Option<OpToken> {
        let token = self.cursor.current();
        let spelling = match token.kind {
            TokenKind::Operator(name) => name,
            TokenKind::Pipe if !self.context.pipe_is_separator() => self.interner.intern("|"),
            _ => return None,
        };
        Some(OpToken {
            spelling,
            span: token.span,
        })
    }

    /// `callee arg*` with an optional trailing block.
    ///
    /// In type position the result is a `TypeApp` and a following `{` is
    /// left for the enclosing declaration.
    fn parse_application(&mut self) -> Result<ExprId, ParseError> {
        let callee = self.parse_primary()?;
        let mut args = Vec::new();
        while self.at_argument_start() {
            args.push(self.parse_primary()?);
        }
        if args.is_empty() {
            return Ok(callee);
        }

        let start = self.arena.expr(callee).span;
        let kind = if self.context.in_type() {
            ExprKind::TypeApp { callee, args }
        } else {
            let block = if self.context.allows_trailing_block() && self.cursor.check(TokenTag::LBrace)
            {
                Some(self.parse_block()?)
            } else {
                None
            };
            ExprKind::App {
                callee,
                args,
                block,
            }
        };
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_expr(Expr::new(kind, span)))
    }

    /// Tokens that begin an application argument: any primary, including
    /// `if`, `match` and `return`. Lambdas must be parenthesized.
    pub(crate) fn at_argument_start(&self) -> bool {
        matches!(
            self.cursor.current_tag(),
            TokenTag::Ident
                | TokenTag::SymbolIdent
                | TokenTag::Number
                | TokenTag::String
                | TokenTag::Char
                | TokenTag::LParen
                | TokenTag::LBracket
                | TokenTag::If
                | TokenTag::Match
                | TokenTag::Return
        )
    }

    /// Context for an `if` condition or a `match` scrutinee, where a `{`
    /// ends the head instead of starting a block argument.
    pub(crate) fn head_context(&self) -> ParseContext {
        self.context.nested().with(ParseContext::NO_TRAILING_BLOCK)
    }
}
