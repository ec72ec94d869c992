//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Uses bitset-based O(1) membership testing inspired by Go's parser.

use asena_ir::TokenTag;

use crate::cursor::Cursor;

/// A set of token tags using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a [`TokenTag`] discriminant. The same
/// sets describe what the parser expected in an error message and where it
/// may resume after one.
///
/// ```ignore
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenTag::RParen)
///     .with(TokenTag::RBracket);
///
/// if CLOSERS.contains(TokenTag::RParen) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single tag.
    #[inline]
    pub const fn single(tag: TokenTag) -> Self {
        Self(1u128 << tag.index())
    }

    /// Add a tag to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, tag: TokenTag) -> Self {
        Self(self.0 | (1u128 << tag.index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn contains(self, tag: TokenTag) -> bool {
        (self.0 & (1u128 << tag.index())) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Members in [`TokenTag::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = TokenTag> {
        TokenTag::ALL.into_iter().filter(move |&tag| self.contains(tag))
    }

    /// "`a`", "`a` or `b`", or "`a`, `b`, or `c`".
    pub fn format_expected(self) -> String {
        let names: Vec<&str> = self.iter().map(TokenTag::display_name).collect();
        match names.as_slice() {
            [] => "nothing".to_owned(),
            [one] => (*one).to_owned(),
            [first, second] => format!("{first} or {second}"),
            [init @ .., last] => format!("{}, or {last}", init.join(", ")),
        }
    }
}

/// Where a failed statement may resume: its line ends, or its block closes.
pub(crate) const STMT_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenTag::LineBreak)
    .with(TokenTag::RBrace)
    .with(TokenTag::Eof);

/// Where a failed top-level item may resume.
pub(crate) const ITEM_BOUNDARY: TokenSet = TokenSet::new()
    .with(TokenTag::LineBreak)
    .with(TokenTag::Eof);

/// Skip tokens until one in `boundary` appears at bracket depth 0.
///
/// Bracketed groups are skipped whole. A closer with no opener that is not
/// itself in `boundary` is skipped too, so a stray `)` cannot stall
/// recovery. Stops at `Eof` regardless of `boundary`.
pub(crate) fn synchronize(cursor: &mut Cursor<'_>, boundary: TokenSet) {
    let mut depth = 0usize;
    loop {
        let tag = cursor.current_tag();
        match tag {
            TokenTag::Eof => return,
            TokenTag::LParen | TokenTag::LBracket | TokenTag::LBrace => depth += 1,
            TokenTag::RParen | TokenTag::RBracket | TokenTag::RBrace => {
                if depth == 0 {
                    if boundary.contains(tag) {
                        return;
                    }
                } else {
                    depth -= 1;
                }
            }
            _ if depth == 0 && boundary.contains(tag) => return,
            _ => {}
        }
        cursor.advance();
    }
}
