//! calc CLI
//!
//! Evaluates infix integer expressions, one per line.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use calcc::commands::{eval_expr, eval_lines, explain_error, lex_expr, parse_expr};
use calcc::{init_tracing, Config};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();

    let ok = match args.get(1).map(String::as_str) {
        None => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Enter one expression per line; Ctrl-D to quit.");
            }
            eval_lines(stdin.lock(), &config.reduce, &mut out, &mut err)
        }
        Some("lex") => {
            let Some(expr) = args.get(2) else {
                eprintln!("Usage: calc lex <expr>");
                return ExitCode::FAILURE;
            };
            lex_expr(expr, &mut out, &mut err)
        }
        Some("parse") => {
            let Some(expr) = args.get(2) else {
                eprintln!("Usage: calc parse <expr>");
                return ExitCode::FAILURE;
            };
            parse_expr(expr, &config.reduce, &mut out, &mut err)
        }
        Some("explain" | "--explain") => {
            let Some(code) = args.get(2) else {
                eprintln!("Usage: calc explain <ERROR_CODE>");
                eprintln!("Example: calc explain E0002");
                return ExitCode::FAILURE;
            };
            explain_error(code, &mut out, &mut err)
        }
        Some("help" | "--help" | "-h") => {
            print_usage();
            true
        }
        Some("version" | "--version" | "-v") => {
            println!("calc {}", env!("CARGO_PKG_VERSION"));
            true
        }
        Some(_) => args[1..].iter().fold(true, |ok, expr| {
            eval_expr(expr, &config.reduce, &mut out, &mut err) && ok
        }),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn print_usage() {
    println!("calc - infix integer expression evaluator");
    println!();
    println!("Usage: calc [command | <expr>...]");
    println!();
    println!("With no arguments, reads one expression per line from stdin.");
    println!();
    println!("Commands:");
    println!("  <expr>...            Evaluate each argument as an expression");
    println!("  lex <expr>           Tokenize and display tokens");
    println!("  parse <expr>         Reduce and display the tree");
    println!("  explain <code>       Explain an error code (e.g., E0002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Operators (reduced in this order each pass):");
    println!("  ( )  then  * /  then  + -  then  < >  then  ^ %  then prefix + -");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Tracing filter, e.g. calc_parse=debug");
    println!("  CALC_MAX_PASSES      Fail expressions needing more reduction passes");
}
