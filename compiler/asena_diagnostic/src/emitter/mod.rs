//! Diagnostic rendering.
//!
//! Emitters turn [`Diagnostic`]s into output. The front-end itself never
//! prints; callers pick an emitter and feed it the diagnostics a parse
//! returned.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    fn flush(&mut self);
}
