//! Output Emitter
//!
//! Abstraction for output production during printing.

/// Trait for emitting formatted output.
///
/// The printer writes to an emitter while it walks the tree. Different
/// implementations can target in-memory strings or other destinations.
pub trait Emitter {
    /// Emit a text fragment.
    fn emit(&mut self, text: &str);

    /// Emit a newline (Unix-style `\n`).
    fn emit_newline(&mut self);

    /// Emit indentation (4 spaces per level).
    fn emit_indent(&mut self, level: usize);

    /// Emit a single space.
    fn emit_space(&mut self);
}

/// String-based emitter for in-memory formatting.
#[derive(Default)]
pub struct StringEmitter {
    buffer: String,
}

impl StringEmitter {
    /// Create a new string emitter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the formatted output.
    pub fn output(self) -> String {
        self.buffer
    }

    /// Get the current buffer contents without consuming.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Ensure the output ends with a single newline, unless it is empty.
    pub fn ensure_trailing_newline(&mut self) {
        while self.buffer.ends_with("\n\n") {
            self.buffer.pop();
        }
        if !self.buffer.is_empty() && !self.buffer.ends_with('\n') {
            self.buffer.push('\n');
        }
    }
}

impl Emitter for StringEmitter {
    fn emit(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    fn emit_newline(&mut self) {
        self.buffer.push('\n');
    }

    fn emit_indent(&mut self, level: usize) {
        let spaces = level * 4;
        for _ in 0..spaces {
            self.buffer.push(' ');
        }
    }

    fn emit_space(&mut self) {
        self.buffer.push(' ');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn string_emitter_basic() {
        let mut emitter = StringEmitter::new();
        emitter.emit("hello");
        emitter.emit_space();
        emitter.emit("world");
        assert_eq!(emitter.as_str(), "hello world");
    }

    #[test]
    fn string_emitter_indentation() {
        let mut emitter = StringEmitter::new();
        emitter.emit("f {");
        emitter.emit_newline();
        emitter.emit_indent(1);
        emitter.emit("x");
        assert_eq!(emitter.output(), "f {\n    x");
    }

    #[test]
    fn trailing_newline_is_single() {
        let mut emitter = StringEmitter::new();
        emitter.emit("x\n\n\n");
        emitter.ensure_trailing_newline();
        assert_eq!(emitter.as_str(), "x\n");

        let mut empty = StringEmitter::new();
        empty.ensure_trailing_newline();
        assert_eq!(empty.output(), "");
    }
}
