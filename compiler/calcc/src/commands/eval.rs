//! Evaluation commands: one expression, or one per input line.

use std::io::{BufRead, Write};

use calc_parse::ReduceConfig;
use tracing::warn;

use super::report;
use crate::evaluate_line;

/// Evaluate a single expression, printing its signed result.
pub fn eval_expr(
    expr: &str,
    config: &ReduceConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let line = expr.trim();
    match evaluate_line(line, config) {
        Ok(value) => {
            let _ = writeln!(out, "{value}");
            true
        }
        Err(error) => {
            report(err, line, &error);
            false
        }
    }
}

/// Evaluate every non-blank line of `input`.
///
/// A failed line is reported and the loop moves on. Returns `false` if any
/// line failed or the input could not be read.
pub fn eval_lines(
    input: impl BufRead,
    config: &ReduceConfig,
    out: &mut impl Write,
    err: &mut impl Write,
) -> bool {
    let mut ok = true;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "stopped reading input");
                let _ = writeln!(err, "error: failed to read input: {e}");
                return false;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        ok &= eval_expr(&line, config, out, err);
    }
    ok
}
