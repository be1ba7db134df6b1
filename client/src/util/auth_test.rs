use super::*;

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
    assert_eq!(bearer_value(" abc123\n"), "Bearer abc123");
}

#[test]
fn blank_tokens_are_absent() {
    assert_eq!(normalize_token(None), None);
    assert_eq!(normalize_token(Some("   ".to_owned())), None);
    assert_eq!(normalize_token(Some(" tok ".to_owned())), Some("tok".to_owned()));
}
