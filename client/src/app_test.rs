use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

use super::*;
use crate::util::storage::MemoryStore;

fn session_with(roles: &[&str], active: Option<&str>) -> SessionState {
    let payload = serde_json::json!({ "nameid": "9", "unique_name": "dana", "role": roles });
    let token = format!("h.{}.s", URL_SAFE_NO_PAD.encode(payload.to_string()));
    let mut session = SessionState::default();
    session.apply_token(&token, &MemoryStore::new()).unwrap();
    session.active_role = active.map(str::to_owned);
    session.ready = true;
    session
}

fn signed_out() -> SessionState {
    let mut session = SessionState::default();
    session.ready = true;
    session
}

// =============================================================
// Route guards
// =============================================================

#[test]
fn admin_only_denies_admin_holder_with_leader_active() {
    let session = session_with(&["Admin", "Leader"], Some("Leader"));
    assert_eq!(admin_only(&session), GuardDecision::Redirect("/home"));
}

#[test]
fn admin_only_allows_active_admin() {
    assert!(admin_only(&session_with(&["Admin", "Leader"], Some("Admin"))).is_allowed());
}

#[test]
fn admin_only_denies_token_without_admin() {
    assert_eq!(admin_only(&session_with(&["User"], Some("User"))), GuardDecision::Redirect("/home"));
}

#[test]
fn admin_only_sends_signed_out_to_login() {
    assert_eq!(admin_only(&signed_out()), GuardDecision::Redirect("/login"));
}

#[test]
fn signed_in_redirects_signed_out_to_login() {
    assert_eq!(signed_in(&signed_out()), GuardDecision::Redirect("/login"));
    assert!(signed_in(&session_with(&["User"], Some("User"))).is_allowed());
}

// =============================================================
// Route conditions
// =============================================================

#[test]
fn every_guard_waits_while_session_not_ready() {
    let guards: [(&str, Guard); 3] =
        [("signed_in", signed_in), ("admin_only", admin_only), ("guest", guest_guard)];
    let pending = RwSignal::new(SessionState::default());
    for (name, guard) in guards {
        assert_eq!(allowed(pending, guard)(), None, "{name}");
    }

    let mut unready = session_with(&["Admin"], Some("Admin"));
    unready.ready = false;
    let unready = RwSignal::new(unready);
    for (name, guard) in guards {
        assert_eq!(allowed(unready, guard)(), None, "{name}");
    }
}

#[test]
fn allowed_reports_guard_outcome_once_ready() {
    let session = RwSignal::new(session_with(&["Admin", "Leader"], Some("Leader")));
    assert_eq!(allowed(session, signed_in)(), Some(true));
    assert_eq!(allowed(session, admin_only)(), Some(false));
    assert_eq!(allowed(session, guest_guard)(), Some(false));

    session.update(|s| s.active_role = Some("Admin".to_owned()));
    assert_eq!(allowed(session, admin_only)(), Some(true));
}

#[test]
fn redirect_to_follows_the_denying_guard() {
    let anonymous = RwSignal::new(signed_out());
    assert_eq!(redirect_to(anonymous, signed_in)(), "/login");
    assert_eq!(redirect_to(anonymous, admin_only)(), "/login");

    let leader = RwSignal::new(session_with(&["Admin", "Leader"], Some("Leader")));
    assert_eq!(redirect_to(leader, admin_only)(), "/home");
}

#[test]
fn redirect_to_sends_unpicked_multi_role_from_login_to_selector() {
    let session = RwSignal::new(session_with(&["Admin", "Leader"], None));
    assert_eq!(redirect_to(session, guest_guard)(), "/home/select-role");
}
