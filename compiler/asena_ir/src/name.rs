//! Interned identifier handle.

use std::fmt;

/// Index of a spelling in a [`StringInterner`](crate::StringInterner).
///
/// Two names from the same interner are equal exactly when their spellings
/// are equal. Names from different interners must not be compared.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// The empty string, pre-interned at index 0 of every interner.
    pub const EMPTY: Name = Name(0);

    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Name(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self.0)
    }
}

crate::static_assert_size!(Name, 4);
