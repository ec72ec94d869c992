//! Per-parse string interner.
//!
//! Each parse owns one interner, so there is no locking and no global
//! state: many files can be parsed in parallel, each with its own interner.

use rustc_hash::FxHashMap;

use crate::Name;

/// Maps spellings to compact [`Name`] handles and back.
#[derive(Clone, Debug)]
pub struct StringInterner {
    map: FxHashMap<Box<str>, Name>,
    strings: Vec<Box<str>>,
}

impl StringInterner {
    /// Create an interner holding only the empty string.
    pub fn new() -> Self {
        let mut interner = StringInterner {
            map: FxHashMap::default(),
            strings: Vec::with_capacity(256),
        };
        interner.intern("");
        interner
    }

    /// Intern `s`, returning the existing handle when it was seen before.
    ///
    /// # Panics
    /// Panics after `u32::MAX` distinct spellings, which cannot happen for
    /// sources the lexer accepts (at most one spelling per byte).
    pub fn intern(&mut self, s: &str) -> Name {
        if let Some(&name) = self.map.get(s) {
            return name;
        }
        let index = u32::try_from(self.strings.len())
            .unwrap_or_else(|_| panic!("interner exceeded u32::MAX spellings"));
        let name = Name::from_raw(index);
        self.strings.push(s.into());
        self.map.insert(s.into(), name);
        name
    }

    /// Look up the spelling behind `name`.
    ///
    /// Unknown names resolve to the empty string.
    pub fn lookup(&self, name: Name) -> &str {
        self.strings.get(name.index()).map_or("", |s| s)
    }

    /// Number of distinct spellings, including the empty string.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Always false: the empty string is interned on construction.
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn same_spelling_same_name() {
        let mut interner = StringInterner::new();
        let a = interner.intern("length");
        let b = interner.intern("length");
        let c = interner.intern("size");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(interner.lookup(c), "size");
    }

    #[test]
    fn empty_is_preinterned() {
        let mut interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.len(), 1);
        assert!(!interner.is_empty());
    }

    #[test]
    fn unknown_name_is_empty_text() {
        let interner = StringInterner::new();
        assert_eq!(interner.lookup(Name::from_raw(99)), "");
    }
}
