use super::*;

#[test]
fn profile_update_never_sends_role_ids() {
    let dto = build_profile_update("erin", "erin@example.com", "").unwrap();
    assert_eq!(dto.username.as_deref(), Some("erin"));
    assert_eq!(dto.password, None);
    assert_eq!(dto.role_ids, None);
}

#[test]
fn profile_update_keeps_password_verbatim() {
    let dto = build_profile_update("erin", "erin@example.com", " p w ").unwrap();
    assert_eq!(dto.password.as_deref(), Some(" p w "));
}

#[test]
fn profile_update_validates_fields() {
    assert_eq!(build_profile_update(" ", "erin@example.com", ""), Err("Username is required."));
    assert_eq!(build_profile_update("erin", "erin", ""), Err("Enter a valid email address."));
}
