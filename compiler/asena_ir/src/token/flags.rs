//! Per-token layout flags.

/// What preceded a token, packed into one byte.
///
/// The lexer drops whitespace and comments, so these bits are the only
/// record of layout that survives into the token stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct TokenFlags(u8);

impl TokenFlags {
    /// Spaces or tabs preceded this token.
    pub const SPACE_BEFORE: u8 = 1 << 0;
    /// A newline preceded this token.
    pub const NEWLINE_BEFORE: u8 = 1 << 1;
    /// A comment preceded this token.
    pub const TRIVIA_BEFORE: u8 = 1 << 2;
    /// On a `LineBreak`: at least one `;` was collapsed into it.
    pub const HAS_SEMICOLON: u8 = 1 << 3;

    pub const EMPTY: Self = TokenFlags(0);

    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        TokenFlags(bits)
    }

    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn contains(self, flag: u8) -> bool {
        self.0 & flag != 0
    }

    #[inline]
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Nothing at all separated this token from the previous one.
    #[inline]
    pub const fn is_adjacent(self) -> bool {
        self.0 & (Self::SPACE_BEFORE | Self::NEWLINE_BEFORE | Self::TRIVIA_BEFORE) == 0
    }
}
