use super::*;

fn session_with(roles: &[&str], active: Option<&str>) -> SessionState {
    let mut session = SessionState::default();
    session.is_logged_in = true;
    session.ready = true;
    session.roles = roles.iter().map(|r| (*r).to_owned()).collect();
    session.active_role = active.map(str::to_owned);
    session
}

fn hrefs(session: &SessionState) -> Vec<&'static str> {
    nav_links(session).into_iter().map(|l| l.href).collect()
}

#[test]
fn nav_links_for_plain_user_hide_admin_screens() {
    let session = session_with(&["User"], Some("User"));
    assert_eq!(
        hrefs(&session),
        vec!["/home/leaves", "/home/leaves/new", "/home/profile"]
    );
}

#[test]
fn nav_links_for_admin_include_users_and_roles() {
    let session = session_with(&["Admin"], Some("Admin"));
    let links = hrefs(&session);
    assert_eq!(links[0], "/home/users");
    assert_eq!(links[1], "/home/roles");
    assert!(!links.contains(&"/home/select-role"));
}

#[test]
fn nav_links_offer_role_switch_for_multi_role_tokens() {
    let session = session_with(&["Admin", "Leader"], Some("Leader"));
    assert!(hrefs(&session).contains(&"/home/select-role"));
}

#[test]
fn role_badge_reflects_selection_state() {
    assert_eq!(role_badge(&session_with(&["User"], Some("User"))), "User");
    assert_eq!(role_badge(&session_with(&["Admin", "User"], None)), "No role selected");
    assert_eq!(role_badge(&session_with(&[], None)), "No role");
}
