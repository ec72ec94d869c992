//! Dialect selection.

/// Which top-level forms a file may contain.
///
/// Every dialect shares the same grammar for expressions, patterns and
/// statements; the flags only decide what the top level accepts and what
/// is collected alongside the tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DialectConfig {
    /// `use`, `#command`, type declarations, signatures and clauses.
    pub accepts_declarations: bool,
    /// Bare statements at the top level.
    pub accepts_statements: bool,
    /// Attach `//!` comments to the declaration that follows them. When
    /// unset they stay in the comment list only.
    pub collects_doc_strings: bool,
    /// A `#!` first line is allowed. When unset it is reported as an error.
    pub accepts_shebang: bool,
}

impl DialectConfig {
    /// Full declaration files, the default.
    pub const fn declarations() -> Self {
        DialectConfig {
            accepts_declarations: true,
            accepts_statements: false,
            collects_doc_strings: true,
            accepts_shebang: true,
        }
    }

    /// Script-like files made of statements and expressions only.
    pub const fn expressions() -> Self {
        DialectConfig {
            accepts_declarations: false,
            accepts_statements: true,
            collects_doc_strings: false,
            accepts_shebang: true,
        }
    }
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self::declarations()
    }
}
