//! Route guard predicates.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app.rs` feeds these into `ProtectedRoute` conditions. They are pure
//! functions of a session snapshot so every redirect rule is unit-testable.

#[cfg(test)]
#[path = "guards_test.rs"]
mod guards_test;

use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const HOME_PATH: &str = "/home";
pub const SELECT_ROLE_PATH: &str = "/home/select-role";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(&'static str),
}

impl GuardDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }

    /// Run `next` only when this check passed; the first redirect wins.
    #[must_use]
    pub fn and_then(self, next: impl FnOnce() -> Self) -> Self {
        match self {
            Self::Allow => next(),
            redirect @ Self::Redirect(_) => redirect,
        }
    }

    /// Where a failed check sends the user; `fallback` when it passed.
    pub fn target_or(self, fallback: &'static str) -> &'static str {
        match self {
            Self::Allow => fallback,
            Self::Redirect(path) => path,
        }
    }
}

fn is_public_path(path: &str) -> bool {
    path == LOGIN_PATH || path == REGISTER_PATH
}

/// Signed-in check plus optional any-of role requirement against token roles.
pub fn auth_guard(session: &SessionState, path: &str, required_roles: &[&str]) -> GuardDecision {
    if !session.is_logged_in {
        if is_public_path(path) {
            return GuardDecision::Allow;
        }
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if is_public_path(path) {
        return GuardDecision::Allow;
    }
    if !required_roles.is_empty() && !required_roles.iter().any(|r| session.has_role(r)) {
        leptos::logging::warn!("auth guard: {path} needs one of {required_roles:?}");
        return GuardDecision::Redirect(HOME_PATH);
    }
    GuardDecision::Allow
}

/// Exact match between the route's role and the active role.
pub fn role_guard(session: &SessionState, required_role: Option<&str>) -> GuardDecision {
    let Some(required) = required_role else {
        return GuardDecision::Allow;
    };
    if session.active_role.as_deref() == Some(required) {
        GuardDecision::Allow
    } else {
        leptos::logging::warn!(
            "role guard: need '{required}', active {:?}",
            session.active_role.as_deref()
        );
        GuardDecision::Redirect(HOME_PATH)
    }
}

/// Keeps signed-in users away from the login and register screens.
///
/// A token with several roles and none active lands on the role selector.
pub fn guest_guard(session: &SessionState) -> GuardDecision {
    if session.token().is_none() {
        GuardDecision::Allow
    } else if session.needs_role_selection() {
        GuardDecision::Redirect(SELECT_ROLE_PATH)
    } else {
        GuardDecision::Redirect(HOME_PATH)
    }
}

/// Where a signed-in page at `path` must go before anything else renders.
///
/// `Some(SELECT_ROLE_PATH)` while a multi-role session has no active role,
/// unless the selector is already showing.
pub fn role_selection_redirect(session: &SessionState, path: &str) -> Option<&'static str> {
    let on_selector = path.trim_end_matches('/') == SELECT_ROLE_PATH;
    (session.needs_role_selection() && !on_selector).then_some(SELECT_ROLE_PATH)
}

/// `ProtectedRoute` condition: `None` until the session has been restored.
pub fn route_condition(session: &SessionState, decision: GuardDecision) -> Option<bool> {
    session.ready.then_some(decision.is_allowed())
}
