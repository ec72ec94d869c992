//! Token storage with a parallel tag array.

use std::ops::Index;

use super::{Token, TokenTag};

/// The cooked token stream of one source buffer.
///
/// Always ends with exactly one `Eof` token once the lexer is done.
/// `tags[i] == tokens[i].kind.tag()` for every `i`, so dispatch code can
/// compare one byte instead of the whole kind.
#[derive(Clone, Default, PartialEq, Eq, Hash, Debug)]
pub struct TokenList {
    tokens: Vec<Token>,
    tags: Vec<TokenTag>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TokenList {
            tokens: Vec::with_capacity(capacity),
            tags: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tags.push(token.kind.tag());
        self.tokens.push(token);
    }

    /// Last token, for in-place widening (line-break collapsing).
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut Token> {
        self.tokens.last_mut()
    }

    #[inline]
    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Tag at `index`, or `Eof` past the end.
    #[inline]
    pub fn tag(&self, index: usize) -> TokenTag {
        self.tags.get(index).copied().unwrap_or(TokenTag::Eof)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl Index<usize> for TokenList {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
