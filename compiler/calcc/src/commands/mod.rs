//! Subcommands of the `calc` binary.
//!
//! Each command writes results to `out` and diagnostics to `err` and
//! reports whether everything it was given succeeded.

mod debug;
mod eval;
mod explain;

pub use debug::{lex_expr, parse_expr};
pub use eval::{eval_expr, eval_lines};
pub use explain::explain_error;

use std::io::Write;

use calc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::CalcError;

/// Render `error` against the line it came from.
fn report(err: &mut impl Write, line: &str, error: &CalcError) {
    let mut emitter = TerminalEmitter::new(err).with_source(line);
    emitter.emit(&error.to_diagnostic());
    emitter.flush();
}
