use pretty_assertions::assert_eq;

use super::*;

fn lookup(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| {
        assert_eq!(key, MAX_PASSES_VAR);
        value.map(str::to_owned)
    }
}

#[test]
fn test_unset_is_unbounded() {
    assert_eq!(Config::from_lookup(lookup(None)), Ok(Config::default()));
    assert_eq!(Config::from_lookup(lookup(Some("  "))), Ok(Config::default()));
}

#[test]
fn test_max_passes() {
    let config = Config::from_lookup(lookup(Some(" 12 "))).map(|c| c.reduce.max_passes);
    assert_eq!(config, Ok(Some(12)));
}

#[test]
fn test_invalid_max_passes() {
    assert_eq!(
        Config::from_lookup(lookup(Some("-1"))),
        Err(ConfigError::InvalidNumber {
            var: MAX_PASSES_VAR,
            value: "-1".to_owned(),
        })
    );
}
