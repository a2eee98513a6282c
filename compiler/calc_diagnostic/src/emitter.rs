//! Diagnostic Emitters
//!
//! Plain-text, human-readable output for diagnostics. When the offending
//! expression line is known, the primary label is drawn under it:
//!
//! ```text
//! error[E0002]: unsupported token `&`
//!   |
//!   | 1 + 1 & 2
//!   |       ^ not a supported operator
//! ```

use std::io::Write;

use crate::Diagnostic;

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Flush any buffered output.
    fn flush(&mut self);
}

/// Terminal emitter.
pub struct TerminalEmitter<'src, W: Write> {
    writer: W,
    source: Option<&'src str>,
}

impl<'src, W: Write> TerminalEmitter<'src, W> {
    /// Create a new terminal emitter.
    pub fn new(writer: W) -> Self {
        TerminalEmitter {
            writer,
            source: None,
        }
    }

    /// Render labels against the expression line they refer to.
    #[must_use]
    pub fn with_source(mut self, source: &'src str) -> Self {
        self.source = Some(source);
        self
    }

    fn write_snippet(&mut self, source: &str, diagnostic: &Diagnostic) {
        let _ = writeln!(self.writer, "  |");
        let _ = writeln!(self.writer, "  | {source}");
        for label in &diagnostic.labels {
            let range = label.span.to_range();
            let Some(prefix) = source.get(..range.start) else {
                continue;
            };
            let column = prefix.chars().count();
            let width = source
                .get(range)
                .map_or(0, |covered| covered.chars().count())
                .max(1);
            let _ = writeln!(
                self.writer,
                "  | {}{} {}",
                " ".repeat(column),
                "^".repeat(width),
                label.message
            );
        }
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<'_, W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: severity[CODE]: message
        let _ = writeln!(
            self.writer,
            "{}[{}]: {}",
            diagnostic.severity, diagnostic.code, diagnostic.message
        );

        if let Some(source) = self.source {
            self.write_snippet(source, diagnostic);
        } else {
            for label in &diagnostic.labels {
                let _ = writeln!(self.writer, "  --> {:?}: {}", label.span, label.message);
            }
        }

        for note in &diagnostic.notes {
            let _ = writeln!(self.writer, "  = note: {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = writeln!(self.writer, "  = help: {suggestion}");
        }
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }
}
