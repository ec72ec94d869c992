//! Statements and blocks.
//!
//! ```text
//! stmt  := 'let' pattern '=' expr
//!        | 'if' expr then_body [else_body]
//!        | pattern '<-' expr
//!        | expr
//! block := '{' (stmt sep)* [stmt] '}'
//! ```
//!
//! `if` directly in statement position may omit its `else`; the same
//! tokens anywhere inside an expression may not.

use asena_ir::ast::{Block, IfStmt, Stmt, StmtId, StmtKind};
use asena_ir::{Span, TokenTag};
use tracing::debug;

use crate::recovery::{synchronize, STMT_BOUNDARY};
use crate::{ParseContext, ParseError, Parser, TokenSet};

impl Parser<'_> {
    pub(crate) fn parse_stmt(&mut self) -> Result<StmtId, ParseError> {
        let start = self.cursor.current_span();
        let kind = match self.cursor.current_tag() {
            TokenTag::Let => {
                debug!(at = ?start, "let statement");
                self.parse_let().map_err(|e| e.with_context("a let statement"))?
            }
            TokenTag::If => {
                debug!(at = ?start, "if statement");
                self.parse_if_stmt()?
            }
            _ if self.depth0_ahead(TokenTag::LeftArrow) => {
                debug!(at = ?start, "ask statement");
                self.parse_ask()?
            }
            _ => StmtKind::Expr(self.parse_expr()?),
        };
        let span = start.merge(self.cursor.previous_span());
        Ok(self.arena.alloc_stmt(Stmt::new(kind, span)))
    }

    /// `let pattern = value`. The value starts on the same line.
    fn parse_let(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let pattern = self.parse_pattern()?;
        self.expect(TokenTag::Eq)?;
        let value = self.parse_expr()?;
        Ok(StmtKind::Let { pattern, value })
    }

    fn parse_if_stmt(&mut self) -> Result<StmtKind, ParseError> {
        self.cursor.advance();
        let cond = self.with_context(self.head_context(), Self::parse_expr)?;
        let then_branch = self.parse_then_body()?;
        let else_branch = self.parse_else_body()?;
        Ok(StmtKind::If(IfStmt {
            cond,
            then_branch,
            else_branch,
        }))
    }

    /// `pattern <- value`
    fn parse_ask(&mut self) -> Result<StmtKind, ParseError> {
        let pattern = self.parse_pattern()?;
        self.expect(TokenTag::LeftArrow)?;
        self.cursor.skip_line_breaks();
        let value = self.parse_expr()?;
        Ok(StmtKind::Ask { pattern, value })
    }

    /// `{ stmt* }`. A statement that fails to parse is replaced by an error
    /// statement and the block carries on with the next line.
    pub(crate) fn parse_block(&mut self) -> Result<Block, ParseError> {
        if !self.cursor.check(TokenTag::LBrace) {
            return Err(ParseError::unexpected(
                self.cursor.current(),
                TokenSet::single(TokenTag::LBrace),
            ));
        }
        let brace = self.open_brace();
        let stmts = self.with_context(ParseContext::NONE, Self::parse_block_stmts);
        let span = self.close(brace)?;
        Ok(Block { stmts, span })
    }

    fn parse_block_stmts(&mut self) -> Vec<StmtId> {
        let mut stmts = Vec::new();
        while !self.cursor.check(TokenTag::RBrace) && !self.cursor.is_at_end() {
            let start = self.cursor.current_span();
            let result = self.parse_stmt().and_then(|stmt| {
                if self.at_item_end() {
                    Ok(stmt)
                } else {
                    Err(ParseError::unexpected(self.cursor.current(), STMT_BOUNDARY))
                }
            });
            match result {
                Ok(stmt) => stmts.push(stmt),
                Err(error) => {
                    debug!(code = %error.code, at = ?error.span, "recovering in block");
                    self.errors.push(error);
                    self.cursor.restore_breaks(false);
                    synchronize(&mut self.cursor, STMT_BOUNDARY);
                    let span = self.skipped_span(start);
                    stmts.push(self.arena.alloc_stmt(Stmt::new(StmtKind::Error, span)));
                }
            }
            self.cursor.skip_line_breaks();
        }
        stmts
    }

    /// From `start` to the last consumed token, or an empty span at
    /// `start` when recovery consumed nothing.
    pub(crate) fn skipped_span(&self, start: Span) -> Span {
        let end = self.cursor.previous_span();
        if end.end > start.start {
            Span::new(start.start, end.end)
        } else {
            Span::point(start.start)
        }
    }
}
