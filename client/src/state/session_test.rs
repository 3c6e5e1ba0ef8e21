use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::storage::MemoryStore;

fn token(roles: &[&str], user_id: i64, exp: Option<u64>) -> String {
    let mut payload = serde_json::json!({
        "nameid": user_id.to_string(),
        "unique_name": format!("user{user_id}"),
        "role": roles,
    });
    if let Some(exp) = exp {
        payload["exp"] = serde_json::json!(exp);
    }
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload.to_string());
    format!("{header}.{body}.sig")
}

// =============================================================
// Login (apply_token)
// =============================================================

#[test]
fn single_role_token_auto_selects_and_persists() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let tok = token(&["User"], 5, None);

    let outcome = session.apply_token(&tok, &store).unwrap();

    assert_eq!(outcome, RoleSelection::Auto("User".to_owned()));
    assert_eq!(outcome.landing_path(), "/home");
    assert!(session.is_logged_in);
    assert!(session.ready);
    assert_eq!(session.active_role.as_deref(), Some("User"));
    assert_eq!(session.current_user_id(), Some(5));
    assert_eq!(session.username.as_deref(), Some("user5"));
    assert_eq!(session.token(), Some(tok.as_str()));
    assert_eq!(store.get(TOKEN_KEY), Some(tok));
    assert_eq!(store.get(SELECTED_ROLE_KEY).as_deref(), Some("User"));
}

#[test]
fn multi_role_token_requires_selection() {
    let store = MemoryStore::new();
    store.set(SELECTED_ROLE_KEY, "Leader");
    let mut session = SessionState::default();

    let outcome = session.apply_token(&token(&["Leader", "Admin"], 1, None), &store).unwrap();

    assert_eq!(outcome, RoleSelection::Required(vec!["Admin".to_owned(), "Leader".to_owned()]));
    assert_eq!(outcome.landing_path(), "/home/select-role");
    assert!(session.is_logged_in);
    assert_eq!(session.active_role, None);
    assert!(session.needs_role_selection());
    assert_eq!(store.get(SELECTED_ROLE_KEY), None);
}

#[test]
fn roleless_token_logs_in_without_active_role() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let outcome = session.apply_token(&token(&[], 3, None), &store).unwrap();
    assert_eq!(outcome, RoleSelection::NoRoles);
    assert!(session.is_logged_in);
    assert!(session.active_role.is_none());
    assert!(!session.needs_role_selection());
}

#[test]
fn apply_token_is_deterministic_across_repeats() {
    let tok = token(&["Admin", "User"], 2, None);
    let first = SessionState::default().apply_token(&tok, &MemoryStore::new()).unwrap();
    let second = SessionState::default().apply_token(&tok, &MemoryStore::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn invalid_token_leaves_state_untouched() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    assert!(session.apply_token("garbage", &store).is_err());
    assert_eq!(session, SessionState::default());
    assert!(store.is_empty());
}

// =============================================================
// Role selection
// =============================================================

#[test]
fn activate_role_accepts_granted_role() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "User"], 1, None), &store).unwrap();

    session.activate_role("Admin", &store).unwrap();

    assert_eq!(session.active_role.as_deref(), Some("Admin"));
    assert_eq!(store.get(SELECTED_ROLE_KEY).as_deref(), Some("Admin"));
    assert!(!session.needs_role_selection());
}

#[test]
fn activate_role_rejects_foreign_role() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["User", "Leader"], 1, None), &store).unwrap();

    let err = session.activate_role("Admin", &store).unwrap_err();

    assert_eq!(err, ApiError::RoleNotAvailable("Admin".to_owned()));
    assert!(session.active_role.is_none());
    assert_eq!(store.get(SELECTED_ROLE_KEY), None);
}

#[test]
fn replace_token_keeps_still_granted_role() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "User"], 1, None), &store).unwrap();
    session.activate_role("Admin", &store).unwrap();

    let fresh = token(&["Admin", "User"], 1, Some(2_000_000_000));
    let outcome = session.replace_token(&fresh, &store).unwrap();

    assert_eq!(outcome, RoleSelection::Auto("Admin".to_owned()));
    assert_eq!(session.token(), Some(fresh.as_str()));
    assert_eq!(store.get(TOKEN_KEY), Some(fresh));
}

#[test]
fn replace_token_drops_revoked_role() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "User"], 1, None), &store).unwrap();
    session.activate_role("Admin", &store).unwrap();

    let outcome = session.replace_token(&token(&["User"], 1, None), &store).unwrap();

    assert_eq!(outcome, RoleSelection::Auto("User".to_owned()));
    assert_eq!(session.active_role.as_deref(), Some("User"));
}

// =============================================================
// Restore
// =============================================================

#[test]
fn restore_without_token_marks_ready_only() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    assert_eq!(session.restore(&store, 0), None);
    assert!(session.ready);
    assert!(!session.is_logged_in);
}

#[test]
fn restore_keeps_persisted_role_when_granted() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, &token(&["Admin", "User"], 8, Some(1_000)));
    store.set(SELECTED_ROLE_KEY, "User");
    let mut session = SessionState::default();

    let outcome = session.restore(&store, 500);

    assert_eq!(outcome, Some(RoleSelection::Auto("User".to_owned())));
    assert!(session.is_logged_in);
    assert_eq!(session.current_user_id(), Some(8));
}

#[test]
fn restore_discards_persisted_role_not_in_token() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, &token(&["Admin", "User"], 8, None));
    store.set(SELECTED_ROLE_KEY, "Leader");
    let mut session = SessionState::default();

    let outcome = session.restore(&store, 0);

    assert!(matches!(outcome, Some(RoleSelection::Required(_))));
    assert!(session.active_role.is_none());
    assert_eq!(store.get(SELECTED_ROLE_KEY), None);
}

#[test]
fn restore_clears_expired_token() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, &token(&["User"], 8, Some(1_000)));
    store.set(SELECTED_ROLE_KEY, "User");
    let mut session = SessionState::default();

    assert_eq!(session.restore(&store, 1_000), None);
    assert!(!session.is_logged_in);
    assert!(session.ready);
    assert!(store.is_empty());
}

#[test]
fn restore_clears_unreadable_token() {
    let store = MemoryStore::new();
    store.set(TOKEN_KEY, "not-a-jwt");
    let mut session = SessionState::default();
    assert_eq!(session.restore(&store, 0), None);
    assert!(store.is_empty());
}

// =============================================================
// Logout
// =============================================================

#[test]
fn clear_resets_every_field_and_storage() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin"], 1, None), &store).unwrap();
    assert!(!store.is_empty());

    session.clear(&store);

    assert_eq!(session, SessionState { ready: true, ..SessionState::default() });
    assert_eq!(session.token(), None);
    assert!(session.roles.is_empty());
    assert!(session.username.is_none());
    assert!(store.is_empty());
}

#[test]
fn clear_on_empty_session_is_harmless() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.clear(&store);
    assert!(!session.is_logged_in);
    assert!(store.is_empty());
}

#[test]
fn is_admin_reads_token_roles() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "Leader"], 1, None), &store).unwrap();
    assert!(session.is_admin());
    assert!(session.has_role("Leader"));
    assert!(!session.has_role("User"));
}
