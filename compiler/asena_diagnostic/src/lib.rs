//! Structured diagnostics for the asena front-end.
//!
//! Every problem the lexer or parser reports becomes a [`Diagnostic`]:
//! a stable [`ErrorCode`], a message, labelled spans and notes. Positions
//! are byte spans; [`span_utils::LineOffsetTable`] turns them into
//! line/column pairs and the [`emitter`] module renders them for humans.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
