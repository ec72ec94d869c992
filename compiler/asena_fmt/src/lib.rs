//! Asena Formatter
//!
//! Canonical printer for parsed asena source.
//!
//! The printer is faithful rather than clever: it never reorders or regroups
//! anything the parser produced, so formatting a tree and parsing the text
//! again yields the same tree. Layout is fixed: one item per line,
//! single spaces around operators, and indented lines inside blocks, match
//! arms and type bodies. Items that failed to parse are left out.
//!
//! # Modules
//!
//! - [`emitter`]: Output abstraction
//! - [`context`]: Indentation tracking
//! - [`Printer`]: The tree walk

pub mod context;
pub mod emitter;
mod printer;

pub use context::{FormatContext, INDENT_WIDTH};
pub use emitter::{Emitter, StringEmitter};
pub use printer::Printer;

use asena_ir::ast::{AstArena, SourceFile};
use asena_ir::StringInterner;

/// Format a parsed file into a string ending in a single newline.
///
/// `source` is the text the file was parsed from; only the shebang line is
/// copied from it verbatim.
pub fn format_source_file(
    file: &SourceFile,
    arena: &AstArena,
    interner: &StringInterner,
    source: &str,
) -> String {
    let mut printer = Printer::new(arena, interner, source, FormatContext::new());
    printer.source_file(file);
    printer.into_context().finalize()
}
