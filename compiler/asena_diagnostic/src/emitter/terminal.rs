//! Human-readable output with optional ANSI colors.
//!
//! ```text
//! error[E1001]: expected expression, found end of input
//!  --> main.asena:1:9
//!   |
//! 1 | let x =
//!   |         ^ expected expression
//! ```

use std::io::Write;

use super::DiagnosticEmitter;
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Severity};

mod colors {
    pub const ERROR: &str = "\x1b[1;31m";
    pub const WARNING: &str = "\x1b[1;33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const SECONDARY: &str = "\x1b[1;34m";
    pub const RESET: &str = "\x1b[0m";
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    #[default]
    Never,
    Always,
}

/// Source text a [`TerminalEmitter`] quotes from.
struct SourceContext<'s> {
    name: &'s str,
    text: &'s str,
    lines: LineOffsetTable,
}

/// Writes diagnostics to any [`Write`] sink.
///
/// Without source context only the header, labels (as byte spans) and
/// notes are printed; [`TerminalEmitter::with_source`] adds
/// `file:line:col` locations and a quoted line with a caret underline.
pub struct TerminalEmitter<'s, W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceContext<'s>>,
}

impl<'s, W: Write> TerminalEmitter<'s, W> {
    pub fn new(writer: W, mode: ColorMode) -> Self {
        TerminalEmitter {
            writer,
            colors: mode == ColorMode::Always,
            source: None,
        }
    }

    /// Quote from `text`, naming it `name` in locations.
    #[must_use]
    pub fn with_source(mut self, name: &'s str, text: &'s str) -> Self {
        self.source = Some(SourceContext {
            name,
            text,
            lines: LineOffsetTable::build(text),
        });
        self
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_header(&mut self, diagnostic: &Diagnostic) {
        let color = match diagnostic.severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
        };
        self.write_colored(&diagnostic.severity.to_string(), color);
        let code = format!("[{}]", diagnostic.code);
        self.write_colored(&code, colors::BOLD);
        let _ = writeln!(self.writer, ": {}", diagnostic.message);
    }

    fn write_label(&mut self, span: asena_ir::Span, message: &str, is_primary: bool) {
        let Some(source) = &self.source else {
            let marker = if is_primary { "-->" } else { "   " };
            let _ = write!(self.writer, "  {marker} {span:?}: ");
            let color = if is_primary {
                colors::ERROR
            } else {
                colors::SECONDARY
            };
            self.write_colored(message, color);
            let _ = writeln!(self.writer);
            return;
        };

        let (line, col) = source.lines.offset_to_line_col(source.text, span.start);
        let line_text = source.lines.line_text(source.text, line).unwrap_or("");
        let gutter = " ".repeat(line.to_string().len());
        let location = format!("{}:{line}:{col}", source.name);
        let width = span_width(line_text, col, span.len());
        let underline = format!(
            "{}{}",
            " ".repeat(col.saturating_sub(1) as usize),
            if is_primary { "^" } else { "-" }.repeat(width)
        );

        let _ = writeln!(self.writer, "{gutter}--> {location}");
        let _ = writeln!(self.writer, "{gutter} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");
        let _ = write!(self.writer, "{gutter} | ");
        let color = if is_primary {
            colors::ERROR
        } else {
            colors::SECONDARY
        };
        self.write_colored(&format!("{underline} {message}"), color);
        let _ = writeln!(self.writer);
    }
}

/// Caret count for a label: the span's characters on its first line, at
/// least one.
fn span_width(line_text: &str, col: u32, len: u32) -> usize {
    let rest: usize = line_text
        .chars()
        .skip(col.saturating_sub(1) as usize)
        .count();
    (len as usize).min(rest).max(1)
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.write_header(diagnostic);
        for label in &diagnostic.labels {
            self.write_label(label.span, &label.message, label.is_primary);
        }
        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }
        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
