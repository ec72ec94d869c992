//! Core diagnostic types.

use std::fmt;

use asena_ir::Span;

use crate::ErrorCode;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A highlighted span with an explanation.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// The main location of the problem; at most one per diagnostic.
    pub is_primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Label {
            span,
            message: message.into(),
            is_primary: false,
        }
    }
}

/// A reportable problem, assembled with the `with_*` builder methods.
///
/// ```
/// use asena_diagnostic::{Diagnostic, ErrorCode};
/// use asena_ir::Span;
///
/// let diag = Diagnostic::error(ErrorCode::E1003)
///     .with_message("unclosed `(`")
///     .with_label(Span::new(10, 10), "expected `)` here")
///     .with_secondary_label(Span::new(2, 3), "opened here");
/// assert_eq!(diag.primary_span(), Some(Span::new(10, 10)));
/// ```
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
}

impl Diagnostic {
    fn new_with_severity(code: ErrorCode, severity: Severity) -> Self {
        Diagnostic {
            code,
            severity,
            message: String::new(),
            labels: Vec::new(),
            notes: Vec::new(),
        }
    }

    #[cold]
    pub fn error(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Error)
    }

    #[cold]
    pub fn warning(code: ErrorCode) -> Self {
        Self::new_with_severity(code, Severity::Warning)
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    pub fn primary_span(&self) -> Option<Span> {
        self.labels.iter().find(|l| l.is_primary).map(|l| l.span)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builder_collects_labels_and_notes() {
        let diag = Diagnostic::error(ErrorCode::E1001)
            .with_message("unexpected `)`")
            .with_label(Span::new(4, 5), "not expected here")
            .with_secondary_label(Span::new(0, 1), "statement starts here")
            .with_note("expected an expression");

        assert!(diag.is_error());
        assert_eq!(diag.labels.len(), 2);
        assert_eq!(diag.primary_span(), Some(Span::new(4, 5)));
        assert_eq!(diag.notes, vec!["expected an expression".to_string()]);
        assert_eq!(diag.to_string(), "error[E1001]: unexpected `)`");
    }

    #[test]
    fn warning_has_no_primary_until_labelled() {
        let diag = Diagnostic::warning(ErrorCode::E1012);
        assert!(!diag.is_error());
        assert_eq!(diag.primary_span(), None);
    }
}
