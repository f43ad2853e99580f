use crate::parse_id;

#[test]
fn test_parse_id_accepts_integers() {
    assert_eq!(parse_id("1"), Some(1));
    assert_eq!(parse_id("9007199254740993"), Some(9_007_199_254_740_993));
}

#[test]
fn test_parse_id_rejects_non_integers() {
    assert_eq!(parse_id("abc"), None);
    assert_eq!(parse_id("1.5"), None);
    assert_eq!(parse_id(""), None);
}
