//! Parse context flags for context-sensitive parsing.
//!
//! The same token sequence derives differently depending on where it
//! appears. The flags below carry that position down the descent so each
//! ambiguous rule can pick its derivation locally.

/// Context flags for parsing.
///
/// Flags combine with [`ParseContext::with`]. Brackets and blocks reset
/// the flags that only make sense at the level that set them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Parsing a type annotation or clause type.
    /// Applications become `TypeApp` and never take a trailing block.
    pub const IN_TYPE: Self = Self(1 << 0);

    /// A `{` after an application belongs to the enclosing form.
    /// Used in `if` conditions and `match` scrutinees.
    pub const NO_TRAILING_BLOCK: Self = Self(1 << 1);

    /// `|` closes a lambda parameter list instead of being an operator.
    pub const PIPE_IS_SEPARATOR: Self = Self(1 << 2);

    /// Parsing a pattern.
    pub const IN_PATTERN: Self = Self(1 << 3);

    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    #[inline]
    pub const fn in_type(self) -> bool {
        self.has(Self::IN_TYPE)
    }

    /// Whether an application may consume a trailing block argument.
    #[inline]
    pub const fn allows_trailing_block(self) -> bool {
        !self.has(Self::IN_TYPE) && !self.has(Self::NO_TRAILING_BLOCK)
    }

    #[inline]
    pub const fn pipe_is_separator(self) -> bool {
        self.has(Self::PIPE_IS_SEPARATOR)
    }

    #[inline]
    pub const fn in_pattern(self) -> bool {
        self.has(Self::IN_PATTERN)
    }

    /// The context inside a fresh bracket pair: only `IN_TYPE` survives.
    #[inline]
    #[must_use]
    pub const fn nested(self) -> Self {
        Self(self.0 & Self::IN_TYPE.0)
    }
}

#[cfg(test)]
mod tests;
