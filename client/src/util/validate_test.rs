use super::*;

#[test]
fn required_trims_and_rejects_blank() {
    assert_eq!(required("  alice ", "x"), Ok("alice".to_owned()));
    assert_eq!(required("   ", "Name is required."), Err("Name is required."));
}

#[test]
fn is_email_accepts_common_shapes() {
    assert!(is_email("a@b.co"));
    assert!(is_email(" first.last@mail.example.org "));
}

#[test]
fn is_email_rejects_malformed() {
    for bad in ["", "plain", "@b.co", "a@", "a@b", "a@b.", "a@@b.co", "a b@c.io", "a@b..c"] {
        assert!(!is_email(bad), "{bad} should be rejected");
    }
}

#[test]
fn email_distinguishes_blank_from_malformed() {
    assert_eq!(email(""), Err("Email is required."));
    assert_eq!(email("nope"), Err("Enter a valid email address."));
    assert_eq!(email(" x@y.io "), Ok("x@y.io".to_owned()));
}

#[test]
fn optional_secret_keeps_whitespace() {
    assert_eq!(optional_secret(""), None);
    assert_eq!(optional_secret(" pw "), Some(" pw ".to_owned()));
}

#[test]
fn parse_id_handles_missing_and_garbage() {
    assert_eq!(parse_id(Some("12".to_owned())), Some(12));
    assert_eq!(parse_id(Some("x".to_owned())), None);
    assert_eq!(parse_id(None), None);
}
