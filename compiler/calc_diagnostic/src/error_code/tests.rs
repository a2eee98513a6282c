use super::*;

#[test]
fn test_error_code_display() {
    assert_eq!(ErrorCode::E0002.to_string(), "E0002");
    assert_eq!(ErrorCode::E6001.as_str(), "E6001");
}

#[test]
fn test_phase_ranges_are_disjoint() {
    for code in ErrorCode::ALL {
        let phases = [
            code.is_lexer_error(),
            code.is_parser_error(),
            code.is_eval_error(),
            code.is_internal_error(),
        ];
        assert_eq!(
            phases.iter().filter(|p| **p).count(),
            1,
            "{code} must belong to exactly one phase"
        );
    }
}

#[test]
fn test_internal_error_is_distinct() {
    assert!(ErrorCode::E9001.is_internal_error());
    assert!(!ErrorCode::E6001.is_internal_error());
    assert!(!ErrorCode::E1001.is_internal_error());
}

#[test]
fn test_from_str_is_case_insensitive() {
    assert_eq!("e1002".parse::<ErrorCode>(), Ok(ErrorCode::E1002));
    assert_eq!("E4242".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}
