#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn test_get_existing_doc() {
    let doc = ErrorDocs::get(ErrorCode::E0002);
    assert!(doc.unwrap().contains("Unsupported Token"));
}

#[test]
fn test_get_internal_error_doc() {
    let doc = ErrorDocs::get(ErrorCode::E9001);
    assert!(doc.unwrap().contains("Internal Engine Error"));
}

#[test]
fn test_every_code_is_documented() {
    for code in ErrorCode::ALL {
        assert!(ErrorDocs::has_docs(*code), "{code} has no documentation");
    }
}

#[test]
fn test_doc_headings_name_their_code() {
    for code in ErrorDocs::all_codes() {
        let doc = ErrorDocs::get(code).unwrap();
        assert!(
            doc.starts_with(&format!("# {code}:")),
            "{code} doc must start with its own heading"
        );
    }
}

/// Every DOCS entry is unique.
#[test]
fn test_no_duplicate_docs() {
    let codes: Vec<_> = ErrorDocs::all_codes().collect();
    let unique: std::collections::HashSet<_> = codes.iter().collect();
    assert_eq!(
        codes.len(),
        unique.len(),
        "DOCS array contains duplicate error codes"
    );
}
