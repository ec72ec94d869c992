//! Typed indices into the [`AstArena`](super::AstArena).

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($label, "#{}"), self.0)
            }
        }

        crate::static_assert_size!($name, 4);
    };
}

define_id!(
    /// Index of an [`Expr`](super::Expr).
    ExprId,
    "expr"
);
define_id!(
    /// Index of a [`Pattern`](super::Pattern).
    PatternId,
    "pat"
);
define_id!(
    /// Index of a [`Stmt`](super::Stmt).
    StmtId,
    "stmt"
);
