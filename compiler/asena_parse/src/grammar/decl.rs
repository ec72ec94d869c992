//! Declaration parsing.
//!
//! ```text
//! decl      := doc* attr* ( use | command | typedef | clause | signature )
//! use       := 'use' path
//! command   := '#' path primary*
//! typedef   := [vis] ('class' | 'trait' | 'data') path arglist* [':' type] [body]
//! signature := path arglist* [':' type] [block]
//! clause    := path atomic_pattern* '=' [expr]
//! ```
//!
//! A name followed by a depth-0 `=` on the same line is a clause;
//! otherwise it is a signature.

use asena_diagnostic::ErrorCode;
use asena_ir::ast::{
    ArgList, ArgListKind, Clause, Constructor, ConstructorKind, ConstructorParam, Decl, DeclKind,
    DocString, ExprId, Signature, TypeBody, TypeDecl, TypeDeclKind, Visibility,
};
use asena_ir::{TokenFlags, TokenTag};
use tracing::debug;

use super::NAME_START;
use crate::{Delimited, ParseContext, ParseError, Parser, TokenSet};

/// Tokens that can start a declaration after its attributes.
const DECL_START: TokenSet = NAME_START
    .with(TokenTag::Use)
    .with(TokenTag::Hash)
    .with(TokenTag::Class)
    .with(TokenTag::Trait)
    .with(TokenTag::Data)
    .with(TokenTag::Public)
    .with(TokenTag::Sealed)
    .with(TokenTag::Private)
    .with(TokenTag::Internal);

impl Parser<'_> {
    /// One declaration. Doc comments between `docs_from` and the cursor
    /// are attached to it.
    pub(crate) fn parse_decl(&mut self, docs_from: u32) -> Result<Decl, ParseError> {
        let docs: Vec<DocString> = self
            .doc_comments(docs_from)
            .into_iter()
            .map(|c| DocString {
                content: c.content,
                span: c.span,
            })
            .collect();
        let start = docs
            .first()
            .map_or(self.cursor.current_span(), |doc| doc.span);
        let attrs = self.parse_attributes()?;

        let token = self.cursor.current();
        debug!(token = %token.kind.tag(), at = ?token.span, "declaration");
        let kind = match token.kind.tag() {
            TokenTag::Use => {
                self.cursor.advance();
                DeclKind::Using(self.parse_path()?)
            }
            TokenTag::Hash => self.parse_command()?,
            TokenTag::Public
            | TokenTag::Sealed
            | TokenTag::Private
            | TokenTag::Internal
            | TokenTag::Class
            | TokenTag::Trait
            | TokenTag::Data => DeclKind::Type(
                self.parse_type_decl()
                    .map_err(|e| e.with_context("a type declaration"))?,
            ),
            TokenTag::Ident | TokenTag::SymbolIdent => {
                if self.depth0_ahead(TokenTag::Eq) {
                    DeclKind::Clause(self.parse_clause().map_err(|e| e.with_context("a clause"))?)
                } else {
                    DeclKind::Signature(
                        self.parse_signature()
                            .map_err(|e| e.with_context("a signature"))?,
                    )
                }
            }
            _ => {
                return Err(ParseError::expected(
                    ErrorCode::E1012,
                    "a declaration",
                    token,
                    DECL_START,
                ))
            }
        };

        Ok(Decl {
            kind,
            docs,
            attrs,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `#name arg*`
    fn parse_command(&mut self) -> Result<DeclKind, ParseError> {
        self.cursor.advance();
        let name = self.parse_path()?;
        let mut args = Vec::new();
        while self.at_argument_start() {
            args.push(self.parse_primary()?);
        }
        Ok(DeclKind::Command { name, args })
    }

    fn parse_type_decl(&mut self) -> Result<TypeDecl, ParseError> {
        let visibility = match self.cursor.current_tag() {
            TokenTag::Public => Some(Visibility::Public),
            TokenTag::Sealed => Some(Visibility::Sealed),
            TokenTag::Private => Some(Visibility::Private),
            TokenTag::Internal => Some(Visibility::Internal),
            _ => None,
        }
        .map(|vis| (vis, self.cursor.advance().span));

        let kind = match self.cursor.current_tag() {
            TokenTag::Class => TypeDeclKind::Class,
            TokenTag::Trait => TypeDeclKind::Trait,
            TokenTag::Data => TypeDeclKind::Data,
            _ => {
                return Err(ParseError::unexpected(
                    self.cursor.current(),
                    TokenSet::new()
                        .with(TokenTag::Class)
                        .with(TokenTag::Trait)
                        .with(TokenTag::Data),
                ))
            }
        };
        self.cursor.advance();

        let name = self.parse_path()?;
        let arg_lists = self.parse_arg_lists()?;
        let clause_type = self.parse_clause_type()?;
        let body = if self.cursor.check(TokenTag::LBrace) {
            Some(self.parse_type_body(kind)?)
        } else {
            None
        };
        Ok(TypeDecl {
            kind,
            visibility,
            name,
            arg_lists,
            clause_type,
            body,
        })
    }

    /// `(...)` and `[...]` lists after a declared name, in source order.
    fn parse_arg_lists(&mut self) -> Result<Vec<ArgList>, ParseError> {
        let mut lists = Vec::new();
        loop {
            let kind = match self.cursor.current_tag() {
                TokenTag::LParen => ArgListKind::Explicit,
                TokenTag::LBracket => ArgListKind::Implicit,
                _ => return Ok(lists),
            };
            let (params, span) = self.parse_param_group(kind == ArgListKind::Implicit)?;
            lists.push(ArgList { kind, params, span });
        }
    }

    /// `[: type]` after the argument lists.
    fn parse_clause_type(&mut self) -> Result<Option<ExprId>, ParseError> {
        if self.cursor.eat(TokenTag::Colon).is_none() {
            return Ok(None);
        }
        self.parse_type().map(Some)
    }

    /// Whether the cursor is on a line break that contains a `;`.
    fn at_semicolon_break(&self) -> bool {
        self.cursor.check(TokenTag::LineBreak)
            && self
                .cursor
                .current()
                .flags
                .contains(TokenFlags::HAS_SEMICOLON)
    }

    /// `{ ctor, ... ; method ... }` for data and class, `{ method ... }` for
    /// trait.
    fn parse_type_body(&mut self, kind: TypeDeclKind) -> Result<TypeBody, ParseError> {
        // The break right after `{` is inspected, so the brace is opened
        // without skipping it.
        let saved_breaks = self.cursor.set_skip_breaks(false);
        let opened_at = self.cursor.advance().span;
        let brace = Delimited {
            close: TokenTag::RBrace,
            opened_at,
            saved_breaks,
        };

        let (constructors, methods) = self.with_context(ParseContext::NONE, |p| {
            if kind == TypeDeclKind::Trait {
                p.cursor.skip_line_breaks();
                p.parse_methods().map(|methods| (Vec::new(), methods))
            } else {
                p.parse_body_members()
            }
        })?;
        let span = self.close(brace)?;
        Ok(TypeBody {
            constructors,
            methods,
            span,
        })
    }

    /// Constructors up to the `;`, then methods.
    fn parse_body_members(&mut self) -> Result<(Vec<Constructor>, Vec<Signature>), ParseError> {
        let mut constructors = Vec::new();
        if !self.at_semicolon_break() {
            self.cursor.skip_line_breaks();
            while !self.cursor.check(TokenTag::RBrace) && !self.cursor.is_at_end() {
                constructors.push(self.parse_constructor()?);
                if self.cursor.eat(TokenTag::Comma).is_some() && !self.at_semicolon_break() {
                    self.cursor.skip_line_breaks();
                    continue;
                }
                if self.at_semicolon_break() {
                    break;
                }
                if self.cursor.check(TokenTag::LineBreak) {
                    if NAME_START.contains(self.cursor.peek_tag(1)) {
                        let next = self.cursor.peek_tag(1);
                        debug!(?next, "method without `;`");
                        self.cursor.skip_line_breaks();
                        return Err(ParseError::missing_method_separator(
                            self.cursor.current_span(),
                        ));
                    }
                    self.cursor.skip_line_breaks();
                }
                break;
            }
        }

        let mut methods = Vec::new();
        if self.at_semicolon_break() {
            self.cursor.skip_line_breaks();
            methods = self.parse_methods()?;
        }
        Ok((constructors, methods))
    }

    /// Signatures separated by line breaks, up to `}`.
    fn parse_methods(&mut self) -> Result<Vec<Signature>, ParseError> {
        let mut methods = Vec::new();
        while !self.cursor.check(TokenTag::RBrace) && !self.cursor.is_at_end() {
            methods.push(self.parse_signature()?);
            if !self.cursor.check(TokenTag::LineBreak) {
                break;
            }
            self.cursor.skip_line_breaks();
        }
        Ok(methods)
    }

    /// `Name : type`, `Name`, or `Name(param, ...)`.
    fn parse_constructor(&mut self) -> Result<Constructor, ParseError> {
        let name = self.parse_path()?;
        let kind = if self.cursor.eat(TokenTag::Colon).is_some() {
            ConstructorKind::Typed(self.parse_type()?)
        } else if self.cursor.check(TokenTag::LParen) {
            let group = self.open_group();
            let context = self.context.nested();
            let (params, _) = self.with_context(context, |p| {
                p.comma_list(TokenTag::RParen, Self::parse_constructor_param)
            })?;
            self.close(group)?;
            ConstructorKind::Function(Some(params))
        } else {
            ConstructorKind::Function(None)
        };
        Ok(Constructor {
            span: name.span.merge(self.cursor.previous_span()),
            name,
            kind,
        })
    }

    /// `name : type` or a bare type.
    fn parse_constructor_param(&mut self) -> Result<ConstructorParam, ParseError> {
        if self.check_name() && self.cursor.peek_tag(1) == TokenTag::Colon {
            let name = self.parse_ident()?;
            self.cursor.advance();
            let ty = self.parse_type()?;
            return Ok(ConstructorParam::Named { name, ty });
        }
        Ok(ConstructorParam::Positional(self.parse_type()?))
    }

    /// `name arglist* [: type] [block]`
    fn parse_signature(&mut self) -> Result<Signature, ParseError> {
        let name = self.parse_path()?;
        let arg_lists = self.parse_arg_lists()?;
        let clause_type = self.parse_clause_type()?;
        let value = if self.cursor.check(TokenTag::LBrace) {
            Some(self.parse_block()?)
        } else {
            None
        };
        Ok(Signature {
            span: name.span.merge(self.cursor.previous_span()),
            name,
            arg_lists,
            clause_type,
            value,
        })
    }

    /// `name pattern* = value`. The value must start on the same line as
    /// the `=`; a clause whose value is missing has none.
    fn parse_clause(&mut self) -> Result<Clause, ParseError> {
        let name = self.parse_path()?;
        let mut patterns = Vec::new();
        while !self.cursor.check(TokenTag::Eq) {
            patterns.push(self.parse_atomic_pattern()?);
        }
        self.cursor.advance();
        let value = if self.cursor.check(TokenTag::LineBreak) || self.cursor.is_at_end() {
            None
        } else {
            Some(self.parse_expr()?)
        };
        Ok(Clause {
            span: name.span.merge(self.cursor.previous_span()),
            name,
            patterns,
            value,
        })
    }
}
