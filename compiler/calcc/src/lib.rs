//! calc - infix integer expression evaluator.
//!
//! Library half of the `calc` binary. [`evaluate_line`] runs the whole
//! pipeline (tokenize, reduce, evaluate) on one line; [`commands`] holds
//! the subcommands the binary dispatches to.

pub mod commands;
mod config;

use std::sync::Once;

use calc_diagnostic::Diagnostic;
use calc_eval::{as_signed, evaluate, EvalError};
use calc_lexer::{tokenize, LexError};
use calc_parse::{build_ast, Ast, ParseError, ReduceConfig};
use tracing::debug;

pub use config::{Config, ConfigError, MAX_PASSES_VAR};

/// Any failure along the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl CalcError {
    /// Convert to a diagnostic for display.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CalcError::Lex(e) => e.to_diagnostic(),
            CalcError::Parse(e) => e.to_diagnostic(),
            CalcError::Eval(e) => e.to_diagnostic(),
        }
    }
}

/// Tokenize and reduce a line without evaluating it.
pub fn parse_line(line: &str, config: &ReduceConfig) -> Result<Ast, CalcError> {
    let tokens = tokenize(line.trim())?;
    Ok(build_ast(tokens, config)?)
}

/// Evaluate one expression line to its signed result.
///
/// Every call owns a fresh token arena; nothing carries over between lines.
#[tracing::instrument(level = "debug", skip(config))]
pub fn evaluate_line(line: &str, config: &ReduceConfig) -> Result<i64, CalcError> {
    let ast = parse_line(line, config)?;
    debug!(passes = ast.passes, "reduced");
    let value = evaluate(&ast)?;
    Ok(as_signed(value))
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=calc_parse=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
