//! The `explain` command: display documentation for error codes.

use std::io::Write;

use calc_diagnostic::{ErrorCode, ErrorDocs};

/// Display detailed documentation for a given error code string.
pub fn explain_error(code_str: &str, out: &mut impl Write, err: &mut impl Write) -> bool {
    let Ok(code) = code_str.parse::<ErrorCode>() else {
        let _ = writeln!(err, "Unknown error code: {code_str}");
        let _ = writeln!(err);
        let _ = writeln!(err, "Codes have the format EXXXX where X is a digit.");
        let _ = writeln!(err, "Examples: E0002, E1001, E6001");
        return false;
    };

    if let Some(doc) = ErrorDocs::get(code) {
        let _ = writeln!(out, "{doc}");
        true
    } else {
        let _ = writeln!(err, "No documentation available for {code}");
        false
    }
}
