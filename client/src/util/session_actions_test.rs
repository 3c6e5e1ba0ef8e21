use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::net::types::AuthResponseData;
use crate::util::storage::{MemoryStore, SELECTED_ROLE_KEY, TOKEN_KEY};

fn token(roles: &[&str]) -> String {
    let payload = serde_json::json!({ "nameid": "3", "role": roles });
    format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()))
}

fn login_response(token: Option<String>) -> ApiResponse {
    ApiResponse {
        success: Some(true),
        message: "Welcome".to_owned(),
        data: Some(AuthResponseData { token, ..AuthResponseData::default() }),
        token: None,
    }
}

#[test]
fn finish_login_single_role_lands_home() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let outcome = finish_login(&mut session, &login_response(Some(token(&["User"]))), &store).unwrap();
    assert_eq!(outcome.landing_path(), "/home");
    assert!(session.is_logged_in);
    assert_eq!(store.get(SELECTED_ROLE_KEY).as_deref(), Some("User"));
}

#[test]
fn finish_login_multi_role_lands_on_selector() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let outcome =
        finish_login(&mut session, &login_response(Some(token(&["Admin", "User"]))), &store).unwrap();
    assert_eq!(outcome.landing_path(), "/home/select-role");
    assert!(session.active_role.is_none());
}

#[test]
fn finish_login_without_token_is_error() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let err = finish_login(&mut session, &login_response(None), &store).unwrap_err();
    assert_eq!(err, ApiError::MissingToken);
    assert!(!session.is_logged_in);
    assert!(store.is_empty());
}

#[test]
fn finish_login_with_undecodable_token_is_decode_error() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let err = finish_login(&mut session, &login_response(Some("abc".to_owned())), &store).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
    assert!(!session.is_logged_in);
}

#[test]
fn finish_role_selection_without_new_token_keeps_token() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    let original = token(&["Admin", "Leader"]);
    session.apply_token(&original, &store).unwrap();

    let resp = SelectRoleResponse { success: true, message: None, new_token: None };
    finish_role_selection(&mut session, "Leader", &resp, &store).unwrap();

    assert_eq!(session.active_role.as_deref(), Some("Leader"));
    assert_eq!(session.token(), Some(original.as_str()));
    assert_eq!(store.get(SELECTED_ROLE_KEY).as_deref(), Some("Leader"));
}

#[test]
fn finish_role_selection_swaps_in_new_token() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "Leader"]), &store).unwrap();

    let fresh = token(&["Admin", "Leader", "User"]);
    let resp = SelectRoleResponse { success: true, message: None, new_token: Some(fresh.clone()) };
    finish_role_selection(&mut session, "Admin", &resp, &store).unwrap();

    assert_eq!(session.active_role.as_deref(), Some("Admin"));
    assert_eq!(session.token(), Some(fresh.as_str()));
    assert_eq!(store.get(TOKEN_KEY), Some(fresh));
    assert_eq!(session.roles.len(), 3);
}

#[test]
fn finish_role_selection_rejects_role_missing_from_new_token() {
    let store = MemoryStore::new();
    let mut session = SessionState::default();
    session.apply_token(&token(&["Admin", "Leader"]), &store).unwrap();

    let resp = SelectRoleResponse { success: true, message: None, new_token: Some(token(&["Leader", "User"])) };
    let err = finish_role_selection(&mut session, "Admin", &resp, &store).unwrap_err();

    assert_eq!(err, ApiError::RoleNotAvailable("Admin".to_owned()));
}

#[test]
fn now_secs_is_after_2020() {
    assert!(now_secs() > 1_577_836_800);
}
