//! Numeric literal classification.

use std::fmt;

use crate::Name;

/// Radix of an integer literal, decided by its prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumBase {
    Decimal,
    /// `0o` / `0O`
    Octal,
    /// `0x` / `0X`
    Hex,
    /// `0b` / `0B`
    Binary,
}

impl NumBase {
    /// Source prefix, empty for decimal.
    pub const fn prefix(self) -> &'static str {
        match self {
            NumBase::Decimal => "",
            NumBase::Octal => "0o",
            NumBase::Hex => "0x",
            NumBase::Binary => "0b",
        }
    }

    /// Whether `byte` is a digit in this base.
    pub const fn is_digit(self, byte: u8) -> bool {
        match self {
            NumBase::Decimal => byte.is_ascii_digit(),
            NumBase::Octal => matches!(byte, b'0'..=b'7'),
            NumBase::Hex => byte.is_ascii_hexdigit(),
            NumBase::Binary => matches!(byte, b'0' | b'1'),
        }
    }
}

/// Precision/signedness suffix of a numeric literal.
///
/// `i32` is deliberately absent: it is not part of the literal syntax.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NumSuffix {
    F32,
    F64,
    U1,
    I8,
    U8,
    I16,
    U16,
    U32,
    I64,
    U64,
    I128,
    U128,
    /// `n`: arbitrary-precision natural.
    Nat,
}

impl NumSuffix {
    /// Every suffix, longest spelling first so a prefix scan finds the
    /// longest match.
    pub const LONGEST_FIRST: [NumSuffix; 13] = [
        NumSuffix::I128,
        NumSuffix::U128,
        NumSuffix::F32,
        NumSuffix::F64,
        NumSuffix::I16,
        NumSuffix::U16,
        NumSuffix::U32,
        NumSuffix::I64,
        NumSuffix::U64,
        NumSuffix::U1,
        NumSuffix::I8,
        NumSuffix::U8,
        NumSuffix::Nat,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            NumSuffix::F32 => "f32",
            NumSuffix::F64 => "f64",
            NumSuffix::U1 => "u1",
            NumSuffix::I8 => "i8",
            NumSuffix::U8 => "u8",
            NumSuffix::I16 => "i16",
            NumSuffix::U16 => "u16",
            NumSuffix::U32 => "u32",
            NumSuffix::I64 => "i64",
            NumSuffix::U64 => "u64",
            NumSuffix::I128 => "i128",
            NumSuffix::U128 => "u128",
            NumSuffix::Nat => "n",
        }
    }

    pub const fn is_float(self) -> bool {
        matches!(self, NumSuffix::F32 | NumSuffix::F64)
    }

    /// Longest suffix spelled at the start of `rest`.
    ///
    /// Float suffixes are only considered when `allow_float` is set; octal,
    /// hex and binary literals cannot carry them.
    pub fn longest_prefix_of(rest: &str, allow_float: bool) -> Option<NumSuffix> {
        Self::LONGEST_FIRST
            .into_iter()
            .filter(|s| allow_float || !s.is_float())
            .find(|s| rest.starts_with(s.as_str()))
    }
}

impl fmt::Display for NumSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric literal as written: base, raw digits and optional suffix.
///
/// `digits` excludes the base prefix and the suffix, so `0x1Fu8` has
/// digits `1F`. The value is not computed here; range checking belongs to
/// a later stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NumberLiteral {
    pub base: NumBase,
    pub suffix: Option<NumSuffix>,
    pub digits: Name,
    /// The mantissa has a fractional part (`1.5`).
    pub is_float: bool,
}
