//! Parse errors and their conversion to diagnostics.

use std::fmt;

use asena_diagnostic::span_utils::LineOffsetTable;
use asena_diagnostic::{Diagnostic, ErrorCode};
use asena_ir::{LexErrorKind, Span, Token, TokenKind, TokenTag};

use crate::recovery::TokenSet;

/// What went wrong, independent of wording.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token was missing; `found` stood in its place.
    UnexpectedToken { found: TokenTag, expected: TokenSet },
    /// A string or character literal was not closed before the line ended.
    UnterminatedLiteral,
    /// An `if` in expression position has no `else`.
    MissingMandatoryBranch,
    /// Input matching no lexical rule, or bytes that are not UTF-8.
    UnknownToken,
    /// Methods in a data or class body without the `;` that separates
    /// them from the constructors.
    MissingSeparator,
}

/// Parse error with error code for rich diagnostics.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub code: ErrorCode,
    pub message: String,
    pub span: Span,
    /// The construct being parsed when the error occurred.
    pub context: Option<&'static str>,
    /// Where the unclosed delimiter of an `E1003` error was opened.
    pub opened_at: Option<Span>,
}

/// 1-based line and column of an error, plus its byte offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SourcePosition {
    pub line: u32,
    pub column: u32,
    pub offset: u32,
}

impl ParseError {
    #[cold]
    pub fn new(
        kind: ParseErrorKind,
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
    ) -> Self {
        ParseError {
            kind,
            code,
            message: message.into(),
            span,
            context: None,
            opened_at: None,
        }
    }

    /// `found` where one of `expected` was required.
    ///
    /// A lexer error token in `found` is reported as the lexical problem
    /// it records instead.
    #[cold]
    pub(crate) fn unexpected(found: Token, expected: TokenSet) -> Self {
        Self::expected(ErrorCode::E1001, &expected.format_expected(), found, expected)
    }

    /// Like [`ParseError::unexpected`], describing the expectation in words.
    #[cold]
    pub(crate) fn expected(code: ErrorCode, what: &str, found: Token, expected: TokenSet) -> Self {
        if let TokenKind::Error(lex) = found.kind {
            return Self::lexical(lex, found.span);
        }
        let found_tag = found.kind.tag();
        ParseError::new(
            ParseErrorKind::UnexpectedToken {
                found: found_tag,
                expected,
            },
            code,
            format!("expected {what}, found {}", found_tag.display_name()),
            found.span,
        )
    }

    /// A missing closing delimiter.
    #[cold]
    pub(crate) fn unclosed(close: TokenTag, found: Token, opened_at: Span) -> Self {
        let mut error = Self::expected(
            ErrorCode::E1003,
            close.display_name(),
            found,
            TokenSet::single(close),
        );
        if error.code == ErrorCode::E1003 {
            error.opened_at = Some(opened_at);
        }
        error
    }

    #[cold]
    pub(crate) fn lexical(kind: LexErrorKind, span: Span) -> Self {
        let (error_kind, code) = match kind {
            LexErrorKind::UnknownToken => (ParseErrorKind::UnknownToken, ErrorCode::E0002),
            LexErrorKind::UnterminatedString => {
                (ParseErrorKind::UnterminatedLiteral, ErrorCode::E0001)
            }
            LexErrorKind::UnterminatedChar => {
                (ParseErrorKind::UnterminatedLiteral, ErrorCode::E0004)
            }
        };
        ParseError::new(error_kind, code, kind.description(), span)
    }

    #[cold]
    pub(crate) fn missing_else(span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::MissingMandatoryBranch,
            ErrorCode::E1010,
            "`if` expression has no `else` branch",
            span,
        )
    }

    #[cold]
    pub(crate) fn missing_method_separator(span: Span) -> Self {
        ParseError::new(
            ParseErrorKind::MissingSeparator,
            ErrorCode::E1011,
            "expected `;` between constructors and methods",
            span,
        )
    }

    /// Bytes after `offset` are not valid UTF-8 and were not lexed.
    #[cold]
    pub(crate) fn invalid_utf8(offset: u32) -> Self {
        ParseError::new(
            ParseErrorKind::UnknownToken,
            ErrorCode::E0005,
            "invalid UTF-8 in source; the rest of the input was ignored",
            Span::point(offset),
        )
    }

    /// Attach the construct being parsed. The innermost context wins.
    #[must_use]
    pub fn with_context(mut self, context: &'static str) -> Self {
        if self.context.is_none() {
            self.context = Some(context);
        }
        self
    }

    /// Line, column and byte offset of the error's start.
    pub fn position(&self, table: &LineOffsetTable, source: &str) -> SourcePosition {
        let (line, column) = table.offset_to_line_col(source, self.span.start);
        SourcePosition {
            line,
            column,
            offset: self.span.start,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            ParseErrorKind::UnexpectedToken { found, .. } => {
                format!("unexpected {}", found.display_name())
            }
            _ => self.code.summary().to_owned(),
        };
        let mut diag = Diagnostic::error(self.code)
            .with_message(&self.message)
            .with_label(self.span, label);
        if let Some(opened) = self.opened_at {
            diag = diag.with_secondary_label(opened, "opened here");
        }
        if let Some(context) = self.context {
            diag = diag.with_note(format!("while parsing {context}"));
        }
        diag
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for ParseError {}

/// The input could not be lexed at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FatalError {
    /// The buffer does not start with valid UTF-8.
    InvalidEncoding,
}

impl fmt::Display for FatalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FatalError::InvalidEncoding => {
                write!(f, "source is not valid UTF-8 from its first byte")
            }
        }
    }
}

impl std::error::Error for FatalError {}
