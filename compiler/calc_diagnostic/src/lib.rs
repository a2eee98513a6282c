//! Diagnostic system for error reporting.
//!
//! Every phase of the engine reports failures as a [`Diagnostic`]:
//! - Error codes for searchability (`calc explain E0002`)
//! - Clear messages (what went wrong)
//! - Primary span (which character or subexpression)
//! - Notes and suggestions (how to fix)

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;
