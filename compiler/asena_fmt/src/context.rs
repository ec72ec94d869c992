//! Formatting Context
//!
//! Tracks the indentation level and whether the next fragment starts a
//! fresh line, so callers only say what to print.

use crate::emitter::{Emitter, StringEmitter};

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Formatting context that tracks state during output.
pub struct FormatContext<E: Emitter = StringEmitter> {
    emitter: E,
    indent_level: usize,
    at_line_start: bool,
}

impl FormatContext<StringEmitter> {
    /// Create a new format context with a string emitter.
    pub fn new() -> Self {
        Self::with_emitter(StringEmitter::new())
    }

    /// Finish formatting and return the text, ending in one newline.
    pub fn finalize(mut self) -> String {
        self.emitter.ensure_trailing_newline();
        self.emitter.output()
    }
}

impl Default for FormatContext<StringEmitter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Emitter> FormatContext<E> {
    pub fn with_emitter(emitter: E) -> Self {
        FormatContext {
            emitter,
            indent_level: 0,
            at_line_start: true,
        }
    }

    /// Emit text, indenting first when at the start of a line.
    pub fn emit(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if self.at_line_start {
            self.emitter.emit_indent(self.indent_level);
            self.at_line_start = false;
        }
        self.emitter.emit(text);
    }

    pub fn emit_space(&mut self) {
        self.emitter.emit_space();
    }

    pub fn emit_newline(&mut self) {
        self.emitter.emit_newline();
        self.at_line_start = true;
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn dedent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    pub fn indent_level(&self) -> usize {
        self.indent_level
    }
}
