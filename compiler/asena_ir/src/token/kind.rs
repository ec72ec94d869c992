//! Token kinds and their payload-free tags.

use std::fmt;

use super::NumberLiteral;
use crate::Name;

/// Why the lexer could not classify a stretch of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LexErrorKind {
    /// Bytes that start no lexical rule.
    UnknownToken,
    /// `"` with no closing quote before the end of the line.
    UnterminatedString,
    /// `'c` or `'\c` with no closing quote.
    UnterminatedChar,
}

impl LexErrorKind {
    pub const fn description(self) -> &'static str {
        match self {
            LexErrorKind::UnknownToken => "unknown token",
            LexErrorKind::UnterminatedString => "unterminated string literal",
            LexErrorKind::UnterminatedChar => "unterminated character literal",
        }
    }
}

/// A cooked token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Names and operators
    /// `[a-zA-Z_'][a-zA-Z'0-9_$]*`
    Ident(Name),
    /// `` `+ ``: a symbol run usable as an ordinary name. The payload holds
    /// the symbols without the backtick.
    SymbolIdent(Name),
    /// A run of symbol characters that is not one of the reserved spellings.
    Operator(Name),

    // Literals
    Number(NumberLiteral),
    /// Decoded string contents.
    String(Name),
    Char(char),

    // Keywords
    Use,
    Class,
    Trait,
    Data,
    Public,
    Sealed,
    Private,
    Internal,
    Let,
    If,
    Then,
    Else,
    Match,
    Return,

    // Reserved symbol runs
    /// `=`
    Eq,
    /// `->`
    Arrow,
    /// `=>`
    FatArrow,
    /// `<-`
    LeftArrow,
    /// `|`
    Pipe,
    /// `.`
    Dot,
    /// `..`
    DotDot,

    // Punctuation
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    At,
    Hash,

    /// One or more newlines or `;`, collapsed.
    LineBreak,
    Error(LexErrorKind),
    Eof,
}

impl TokenKind {
    /// Classify an identifier spelling as a keyword.
    pub fn keyword(spelling: &str) -> Option<TokenKind> {
        Some(match spelling {
            "use" => TokenKind::Use,
            "class" => TokenKind::Class,
            "trait" => TokenKind::Trait,
            "data" => TokenKind::Data,
            "public" => TokenKind::Public,
            "sealed" => TokenKind::Sealed,
            "private" => TokenKind::Private,
            "internal" => TokenKind::Internal,
            "let" => TokenKind::Let,
            "if" => TokenKind::If,
            "then" => TokenKind::Then,
            "else" => TokenKind::Else,
            "match" => TokenKind::Match,
            "return" => TokenKind::Return,
            _ => return None,
        })
    }

    /// Classify a symbol run that has a reserved meaning.
    pub fn reserved_symbol(spelling: &str) -> Option<TokenKind> {
        Some(match spelling {
            "=" => TokenKind::Eq,
            "->" => TokenKind::Arrow,
            "=>" => TokenKind::FatArrow,
            "<-" => TokenKind::LeftArrow,
            "|" => TokenKind::Pipe,
            "." => TokenKind::Dot,
            ".." => TokenKind::DotDot,
            _ => return None,
        })
    }

    /// The payload-free tag of this kind.
    pub const fn tag(&self) -> TokenTag {
        match self {
            TokenKind::Ident(_) => TokenTag::Ident,
            TokenKind::SymbolIdent(_) => TokenTag::SymbolIdent,
            TokenKind::Operator(_) => TokenTag::Operator,
            TokenKind::Number(_) => TokenTag::Number,
            TokenKind::String(_) => TokenTag::String,
            TokenKind::Char(_) => TokenTag::Char,
            TokenKind::Use => TokenTag::Use,
            TokenKind::Class => TokenTag::Class,
            TokenKind::Trait => TokenTag::Trait,
            TokenKind::Data => TokenTag::Data,
            TokenKind::Public => TokenTag::Public,
            TokenKind::Sealed => TokenTag::Sealed,
            TokenKind::Private => TokenTag::Private,
            TokenKind::Internal => TokenTag::Internal,
            TokenKind::Let => TokenTag::Let,
            TokenKind::If => TokenTag::If,
            TokenKind::Then => TokenTag::Then,
            TokenKind::Else => TokenTag::Else,
            TokenKind::Match => TokenTag::Match,
            TokenKind::Return => TokenTag::Return,
            TokenKind::Eq => TokenTag::Eq,
            TokenKind::Arrow => TokenTag::Arrow,
            TokenKind::FatArrow => TokenTag::FatArrow,
            TokenKind::LeftArrow => TokenTag::LeftArrow,
            TokenKind::Pipe => TokenTag::Pipe,
            TokenKind::Dot => TokenTag::Dot,
            TokenKind::DotDot => TokenTag::DotDot,
            TokenKind::LParen => TokenTag::LParen,
            TokenKind::RParen => TokenTag::RParen,
            TokenKind::LBracket => TokenTag::LBracket,
            TokenKind::RBracket => TokenTag::RBracket,
            TokenKind::LBrace => TokenTag::LBrace,
            TokenKind::RBrace => TokenTag::RBrace,
            TokenKind::Comma => TokenTag::Comma,
            TokenKind::Colon => TokenTag::Colon,
            TokenKind::At => TokenTag::At,
            TokenKind::Hash => TokenTag::Hash,
            TokenKind::LineBreak => TokenTag::LineBreak,
            TokenKind::Error(_) => TokenTag::Error,
            TokenKind::Eof => TokenTag::Eof,
        }
    }

    pub const fn display_name(&self) -> &'static str {
        self.tag().display_name()
    }

    /// Identifier-like tokens that can name things (`foo`, `` `+ ``).
    pub const fn name(&self) -> Option<Name> {
        match self {
            TokenKind::Ident(n) | TokenKind::SymbolIdent(n) => Some(*n),
            _ => None,
        }
    }
}

/// Payload-free discriminant of a [`TokenKind`].
///
/// Fits in a `u8` and in the 128-bit token sets the parser uses for
/// expected-token reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenTag {
    Ident,
    SymbolIdent,
    Operator,
    Number,
    String,
    Char,
    Use,
    Class,
    Trait,
    Data,
    Public,
    Sealed,
    Private,
    Internal,
    Let,
    If,
    Then,
    Else,
    Match,
    Return,
    Eq,
    Arrow,
    FatArrow,
    LeftArrow,
    Pipe,
    Dot,
    DotDot,
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    At,
    Hash,
    LineBreak,
    Error,
    Eof,
}

impl TokenTag {
    /// Every tag, in discriminant order.
    pub const ALL: [TokenTag; 40] = [
        TokenTag::Ident,
        TokenTag::SymbolIdent,
        TokenTag::Operator,
        TokenTag::Number,
        TokenTag::String,
        TokenTag::Char,
        TokenTag::Use,
        TokenTag::Class,
        TokenTag::Trait,
        TokenTag::Data,
        TokenTag::Public,
        TokenTag::Sealed,
        TokenTag::Private,
        TokenTag::Internal,
        TokenTag::Let,
        TokenTag::If,
        TokenTag::Then,
        TokenTag::Else,
        TokenTag::Match,
        TokenTag::Return,
        TokenTag::Eq,
        TokenTag::Arrow,
        TokenTag::FatArrow,
        TokenTag::LeftArrow,
        TokenTag::Pipe,
        TokenTag::Dot,
        TokenTag::DotDot,
        TokenTag::LParen,
        TokenTag::RParen,
        TokenTag::LBracket,
        TokenTag::RBracket,
        TokenTag::LBrace,
        TokenTag::RBrace,
        TokenTag::Comma,
        TokenTag::Colon,
        TokenTag::At,
        TokenTag::Hash,
        TokenTag::LineBreak,
        TokenTag::Error,
        TokenTag::Eof,
    ];

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable name used in "expected ..." messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenTag::Ident => "identifier",
            TokenTag::SymbolIdent => "symbolic identifier",
            TokenTag::Operator => "operator",
            TokenTag::Number => "number",
            TokenTag::String => "string",
            TokenTag::Char => "character",
            TokenTag::Use => "`use`",
            TokenTag::Class => "`class`",
            TokenTag::Trait => "`trait`",
            TokenTag::Data => "`data`",
            TokenTag::Public => "`public`",
            TokenTag::Sealed => "`sealed`",
            TokenTag::Private => "`private`",
            TokenTag::Internal => "`internal`",
            TokenTag::Let => "`let`",
            TokenTag::If => "`if`",
            TokenTag::Then => "`then`",
            TokenTag::Else => "`else`",
            TokenTag::Match => "`match`",
            TokenTag::Return => "`return`",
            TokenTag::Eq => "`=`",
            TokenTag::Arrow => "`->`",
            TokenTag::FatArrow => "`=>`",
            TokenTag::LeftArrow => "`<-`",
            TokenTag::Pipe => "`|`",
            TokenTag::Dot => "`.`",
            TokenTag::DotDot => "`..`",
            TokenTag::LParen => "`(`",
            TokenTag::RParen => "`)`",
            TokenTag::LBracket => "`[`",
            TokenTag::RBracket => "`]`",
            TokenTag::LBrace => "`{`",
            TokenTag::RBrace => "`}`",
            TokenTag::Comma => "`,`",
            TokenTag::Colon => "`:`",
            TokenTag::At => "`@`",
            TokenTag::Hash => "`#`",
            TokenTag::LineBreak => "line break",
            TokenTag::Error => "invalid token",
            TokenTag::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
