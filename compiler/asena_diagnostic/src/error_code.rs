use std::fmt;

/// Stable codes for every diagnostic the front-end can produce.
///
/// - `E0xxx`: lexer
/// - `E1xxx`: parser
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Unknown token
    E0002,
    /// Unterminated character literal
    E0004,
    /// Input is not valid UTF-8
    E0005,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Expected expression
    E1002,
    /// Unclosed delimiter
    E1003,
    /// Expected identifier
    E1004,
    /// Expected pattern
    E1008,
    /// `if` in expression position without `else`
    E1010,
    /// Methods in a data or class body without a preceding `;`
    E1011,
    /// Expected declaration
    E1012,
}

impl ErrorCode {
    pub const ALL: &'static [ErrorCode] = &[
        ErrorCode::E0001,
        ErrorCode::E0002,
        ErrorCode::E0004,
        ErrorCode::E0005,
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1008,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::E1012,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0004 => "E0004",
            ErrorCode::E0005 => "E0005",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::E1012 => "E1012",
        }
    }

    /// One-line summary of what the code means.
    pub const fn summary(self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "unknown token",
            ErrorCode::E0004 => "unterminated character literal",
            ErrorCode::E0005 => "invalid UTF-8 in source",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "unclosed delimiter",
            ErrorCode::E1004 => "expected identifier",
            ErrorCode::E1008 => "expected pattern",
            ErrorCode::E1010 => "missing mandatory `else` branch",
            ErrorCode::E1011 => "missing `;` before methods",
            ErrorCode::E1012 => "expected declaration",
        }
    }

    pub const fn is_lexer_error(self) -> bool {
        matches!(
            self,
            ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0004 | ErrorCode::E0005
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for code in ErrorCode::ALL {
            let text = code.as_str();
            assert!(seen.insert(text), "duplicate code {text}");
            assert_eq!(text.len(), 5);
            assert!(text.starts_with('E'));
            assert_eq!(code.is_lexer_error(), text.starts_with("E0"));
        }
    }
}
