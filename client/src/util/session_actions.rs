//! Session store operations: login, register, role selection, logout, restore.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these instead of touching `SessionState` directly. Each async
//! action performs its request, then applies the response through one of the
//! `finish_*` functions, which are plain state transitions over a
//! `KeyValueStore` and are unit-tested without a browser.

#[cfg(test)]
#[path = "session_actions_test.rs"]
mod session_actions_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{ApiResponse, LoginRequest, RegisterRequest, SelectRoleResponse};
use crate::state::session::{RoleSelection, SessionState};
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Apply a login response to the session.
///
/// # Errors
///
/// `ApiError::MissingToken` when the response has no token, `ApiError::Decode`
/// when the token's claims cannot be read.
pub fn finish_login(
    session: &mut SessionState,
    resp: &ApiResponse,
    store: &impl KeyValueStore,
) -> Result<RoleSelection, ApiError> {
    let token = resp.token().ok_or(ApiError::MissingToken)?;
    session
        .apply_token(token, store)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Apply a successful `/Auth/select-role` response.
///
/// # Errors
///
/// `ApiError::Decode` for an unreadable re-issued token, or
/// `ApiError::RoleNotAvailable` when the (possibly new) token lacks `role`.
pub fn finish_role_selection(
    session: &mut SessionState,
    role: &str,
    resp: &SelectRoleResponse,
    store: &impl KeyValueStore,
) -> Result<(), ApiError> {
    if let Some(token) = resp.new_token.as_deref().filter(|t| !t.is_empty()) {
        session
            .replace_token(token, store)
            .map_err(|e| ApiError::Decode(e.to_string()))?;
    }
    session.activate_role(role, store)
}

/// Sign in and return where to navigate next plus the backend's greeting.
///
/// # Errors
///
/// Returns the normalized backend error or a token problem; the session is
/// unchanged on error.
pub async fn login(
    session: RwSignal<SessionState>,
    credentials: LoginRequest,
) -> Result<(RoleSelection, String), ApiError> {
    let resp = api::login(&credentials).await?;
    let outcome = session
        .try_update(|s| finish_login(s, &resp, &BrowserStorage))
        .ok_or(ApiError::Unavailable)??;
    leptos::logging::log!("signed in; role outcome {outcome:?}");
    Ok((outcome, resp.message))
}

/// Create an account. Does not sign in.
///
/// # Errors
///
/// Returns the normalized backend error.
pub async fn register(info: RegisterRequest) -> Result<String, ApiError> {
    api::register(&info).await
}

/// Choose the active role for a multi-role session.
///
/// # Errors
///
/// `ApiError::RoleNotAvailable` before any request when the token lacks the
/// role; otherwise the backend error.
pub async fn select_role(session: RwSignal<SessionState>, role: String) -> Result<(), ApiError> {
    if !session.with_untracked(|s| s.has_role(&role)) {
        return Err(ApiError::RoleNotAvailable(role));
    }
    let resp = api::select_role(&role).await?;
    session
        .try_update(|s| finish_role_selection(s, &role, &resp, &BrowserStorage))
        .ok_or(ApiError::Unavailable)??;
    leptos::logging::log!("active role set to {role}");
    Ok(())
}

/// Forget the session everywhere.
pub fn logout(session: RwSignal<SessionState>) {
    session.update(|s| s.clear(&BrowserStorage));
    leptos::logging::log!("signed out");
}

/// Rebuild the session from browser storage. Called once after hydration.
///
/// A restored multi-role token without a saved role is sent to the selector
/// by `HomePage`.
pub fn restore(session: RwSignal<SessionState>) {
    let now = now_secs();
    session.update(|s| {
        if let Some(RoleSelection::Required(roles)) = s.restore(&BrowserStorage, now) {
            leptos::logging::log!("restored session needs a role choice among {roles:?}");
        }
    });
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn now_secs() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as u64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| d.as_secs())
    }
}
