//! Recursive descent parser for asena.
//!
//! Produces a [`SourceFile`] whose expressions, patterns and statements
//! live in a flat [`AstArena`]. Parsing never aborts on a syntax error:
//! the failing declaration or statement becomes an error placeholder, the
//! diagnostic is recorded, and parsing resumes at the next line break.
//!
//! One parser core serves every dialect; a [`DialectConfig`] selects which
//! top-level forms are accepted.

mod context;
mod cursor;
mod dialect;
mod error;
mod grammar;
mod lookahead;
mod recovery;

pub use context::ParseContext;
pub use dialect::DialectConfig;
pub use error::{FatalError, ParseError, ParseErrorKind, SourcePosition};
pub use recovery::TokenSet;

use asena_diagnostic::{Diagnostic, ErrorCode};
use asena_ir::ast::{
    AstArena, Decl, DeclKind, Item, SourceFile, Stmt, StmtKind, SyntaxNode, TreeBuilder,
};
use asena_ir::{Comment, CommentList, Span, StringInterner, Token, TokenKind, TokenList, TokenTag};
use asena_lexer::LexOutput;
use tracing::debug;

use crate::cursor::Cursor;
use crate::lookahead::GroupMatches;
use crate::recovery::{synchronize, ITEM_BOUNDARY};

/// Everything one parse produces.
///
/// The tree is always present; when `errors` is non-empty it is the
/// best-effort tree with error placeholders where input was skipped.
#[derive(Clone, Debug)]
pub struct ParseOutput {
    pub file: SourceFile,
    pub arena: AstArena,
    /// Every spelling in the tree, including operators the parser named.
    pub interner: StringInterner,
    pub comments: CommentList,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors.iter().map(ParseError::to_diagnostic).collect()
    }

    /// The named-field view of the whole file.
    pub fn syntax_tree(&self) -> SyntaxNode {
        TreeBuilder::new(&self.arena, &self.interner).source_file(&self.file)
    }
}

/// Parse an already lexed buffer.
pub fn parse(lexed: &LexOutput, interner: &StringInterner, config: &DialectConfig) -> ParseOutput {
    let mut parser = Parser::new(&lexed.tokens, &lexed.comments, interner.clone(), config);
    let file = parser.parse_file(lexed.shebang);
    ParseOutput {
        file,
        arena: parser.arena,
        interner: parser.interner,
        comments: lexed.comments.clone(),
        errors: parser.errors,
    }
}

/// Lex and parse `source` with a fresh interner.
pub fn parse_source(source: &str, config: &DialectConfig) -> ParseOutput {
    let mut interner = StringInterner::new();
    let lexed = asena_lexer::lex(source, &mut interner);
    parse(&lexed, &interner, config)
}

/// Parse raw bytes.
///
/// Fails only when the buffer is not UTF-8 from its very first byte.
/// Otherwise the longest valid prefix is parsed and an `E0005` error
/// marks where decoding stopped.
pub fn parse_bytes(bytes: &[u8], config: &DialectConfig) -> Result<ParseOutput, FatalError> {
    match std::str::from_utf8(bytes) {
        Ok(source) => Ok(parse_source(source, config)),
        Err(err) if err.valid_up_to() == 0 => Err(FatalError::InvalidEncoding),
        Err(err) => {
            let valid = err.valid_up_to();
            let source = std::str::from_utf8(&bytes[..valid])
                .map_err(|_| FatalError::InvalidEncoding)?;
            debug!(valid, "truncating source at invalid UTF-8");
            let mut output = parse_source(source, config);
            let offset = u32::try_from(valid).unwrap_or(u32::MAX);
            output.errors.push(ParseError::invalid_utf8(offset));
            Ok(output)
        }
    }
}

/// An opened delimiter waiting for its closer.
struct Delimited {
    close: TokenTag,
    opened_at: Span,
    saved_breaks: bool,
}

/// Parser state.
struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: AstArena,
    /// Owned copy so binary `|` can be given a spelling.
    interner: StringInterner,
    comments: &'a CommentList,
    config: &'a DialectConfig,
    errors: Vec<ParseError>,
    context: ParseContext,
    groups: GroupMatches,
}

impl<'a> Parser<'a> {
    fn new(
        tokens: &'a TokenList,
        comments: &'a CommentList,
        interner: StringInterner,
        config: &'a DialectConfig,
    ) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: AstArena::new(),
            interner,
            comments,
            config,
            errors: Vec::new(),
            context: ParseContext::NONE,
            groups: GroupMatches::new(tokens),
        }
    }

    /// Whether `target` occurs at bracket depth 0 between the cursor and
    /// the end of the logical line.
    fn depth0_ahead(&self, target: TokenTag) -> bool {
        lookahead::depth0_before_break(
            self.cursor.tokens(),
            &self.groups,
            self.cursor.position(),
            target,
        )
    }

    /// Whether the group opening at the cursor is a parameter list, i.e.
    /// non-empty and followed by `->`.
    fn arrow_after_group(&self) -> bool {
        lookahead::arrow_after_group(
            self.cursor.tokens(),
            &self.groups,
            self.cursor.position(),
            self.cursor.skips_breaks(),
        )
    }

    /// Run `f` with `context` in effect, restoring the previous context
    /// afterwards.
    fn with_context<T>(&mut self, context: ParseContext, f: impl FnOnce(&mut Self) -> T) -> T {
        let saved = std::mem::replace(&mut self.context, context);
        let result = f(self);
        self.context = saved;
        result
    }

    fn expect(&mut self, tag: TokenTag) -> Result<Span, ParseError> {
        match self.cursor.eat(tag) {
            Some(span) => Ok(span),
            None => Err(ParseError::unexpected(
                self.cursor.current(),
                TokenSet::single(tag),
            )),
        }
    }

    /// Consume `(` or `[`. Inside, line breaks are layout.
    fn open_group(&mut self) -> Delimited {
        let close = if self.cursor.check(TokenTag::LBracket) {
            TokenTag::RBracket
        } else {
            TokenTag::RParen
        };
        let saved_breaks = self.cursor.set_skip_breaks(true);
        let opened_at = self.cursor.advance().span;
        Delimited {
            close,
            opened_at,
            saved_breaks,
        }
    }

    /// Consume `{`. Inside, line breaks separate statements again.
    fn open_brace(&mut self) -> Delimited {
        let saved_breaks = self.cursor.set_skip_breaks(false);
        let opened_at = self.cursor.advance().span;
        self.cursor.skip_line_breaks();
        Delimited {
            close: TokenTag::RBrace,
            opened_at,
            saved_breaks,
        }
    }

    /// Consume the closer of `delims` and return the span of the whole
    /// delimited region.
    fn close(&mut self, delims: Delimited) -> Result<Span, ParseError> {
        if delims.close == TokenTag::RBrace {
            self.cursor.skip_line_breaks();
        }
        self.cursor.restore_breaks(delims.saved_breaks);
        match self.cursor.eat(delims.close) {
            Some(end) => Ok(delims.opened_at.merge(end)),
            None => Err(ParseError::unclosed(
                delims.close,
                self.cursor.current(),
                delims.opened_at,
            )),
        }
    }

    /// Items separated by `,` up to (not including) `close`. A trailing
    /// comma is allowed; reports whether one was present.
    fn comma_list<T>(
        &mut self,
        close: TokenTag,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<(Vec<T>, bool), ParseError> {
        let mut items = Vec::new();
        let mut trailing = false;
        while !self.cursor.check(close) {
            items.push(item(self)?);
            trailing = false;
            if self.cursor.eat(TokenTag::Comma).is_some() {
                trailing = true;
            } else if !self.cursor.check(close) {
                return Err(ParseError::unexpected(
                    self.cursor.current(),
                    TokenSet::new().with(TokenTag::Comma).with(close),
                ));
            }
        }
        Ok((items, trailing))
    }

    /// Whether the current token ends a statement or declaration.
    fn at_item_end(&self) -> bool {
        matches!(
            self.cursor.current_tag(),
            TokenTag::LineBreak | TokenTag::Eof | TokenTag::RBrace
        )
    }

    fn parse_file(&mut self, shebang: Option<Span>) -> SourceFile {
        let shebang = shebang.and_then(|span| {
            if self.config.accepts_shebang {
                Some(span)
            } else {
                self.errors.push(ParseError::expected(
                    ErrorCode::E1001,
                    "a declaration",
                    Token::new(TokenKind::Hash, span),
                    TokenSet::new(),
                ));
                None
            }
        });

        let mut items = Vec::new();
        let mut docs_from = shebang.map_or(0, |span| span.end);
        self.cursor.skip_line_breaks();
        while !self.cursor.is_at_end() {
            items.push(self.parse_item(docs_from));
            docs_from = self.cursor.previous_span().end;
            self.cursor.skip_line_breaks();
        }

        SourceFile {
            shebang,
            items,
            span: Span::new(0, self.cursor.current_span().end),
        }
    }

    /// One top-level item, recovering to the next line break on error.
    fn parse_item(&mut self, docs_from: u32) -> Item {
        let start = self.cursor.current_span();
        let saved_breaks = self.cursor.skips_breaks();
        let as_decl = self.item_is_decl();
        let result = if !self.config.accepts_declarations && !self.config.accepts_statements {
            Err(ParseError::expected(
                ErrorCode::E1012,
                "a declaration",
                self.cursor.current(),
                TokenSet::new(),
            ))
        } else if as_decl {
            self.parse_decl(docs_from).map(Item::Decl)
        } else {
            self.parse_stmt().map(Item::Stmt)
        };
        let result = result.and_then(|item| {
            if matches!(
                self.cursor.current_tag(),
                TokenTag::LineBreak | TokenTag::Eof
            ) {
                Ok(item)
            } else {
                Err(ParseError::unexpected(self.cursor.current(), ITEM_BOUNDARY))
            }
        });

        match result {
            Ok(item) => item,
            Err(error) => {
                debug!(code = %error.code, at = ?error.span, "recovering at top level");
                self.errors.push(error);
                self.cursor.restore_breaks(saved_breaks);
                synchronize(&mut self.cursor, ITEM_BOUNDARY);
                let span = self.skipped_span(start);
                if as_decl {
                    Item::Decl(Decl {
                        kind: DeclKind::Error,
                        docs: Vec::new(),
                        attrs: Vec::new(),
                        span,
                    })
                } else {
                    Item::Stmt(self.arena.alloc_stmt(Stmt::new(StmtKind::Error, span)))
                }
            }
        }
    }

    /// Whether the item at the cursor is parsed as a declaration.
    ///
    /// With both forms accepted, a line is a declaration when it starts
    /// with a declaration keyword, `@` or `#`, or is a name with a depth-0
    /// `=` before the line ends. Only tokens decide; doc comments in front
    /// of a statement stay trivia.
    fn item_is_decl(&self) -> bool {
        if !self.config.accepts_statements {
            return true;
        }
        if !self.config.accepts_declarations {
            return false;
        }
        match self.cursor.current_tag() {
            TokenTag::Use
            | TokenTag::Class
            | TokenTag::Trait
            | TokenTag::Data
            | TokenTag::Public
            | TokenTag::Sealed
            | TokenTag::Private
            | TokenTag::Internal
            | TokenTag::At
            | TokenTag::Hash => true,
            TokenTag::Ident | TokenTag::SymbolIdent => self.depth0_ahead(TokenTag::Eq),
            _ => false,
        }
    }

    /// Doc comments between `from` and the current token, when the dialect
    /// collects them.
    fn doc_comments(&self, from: u32) -> Vec<Comment> {
        if !self.config.collects_doc_strings {
            return Vec::new();
        }
        let until = self.cursor.current_span().start;
        self.comments
            .in_range(from, until)
            .iter()
            .filter(|c| c.is_doc())
            .copied()
            .collect()
    }
}

#[cfg(test)]
mod tests;
