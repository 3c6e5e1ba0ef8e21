//! Session state for the signed-in browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as `RwSignal<SessionState>` from `App`. Route guards, the bearer
//! interceptor, and role-aware pages read it; only the methods below mutate it,
//! and each mutation writes through to the `KeyValueStore` it is given.
//!
//! DESIGN
//! ======
//! The token is the source of truth: roles, user id, and username are always
//! re-derived from its claims. The active role is the one piece of state the
//! user chooses, and it must always be one of the token's roles.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::collections::BTreeSet;

use super::claims::{self, ClaimsError, TokenClaims};
use crate::net::error::ApiError;
use crate::util::storage::{KeyValueStore, SELECTED_ROLE_KEY, TOKEN_KEY};

/// Where a fresh token left the role choice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoleSelection {
    /// Exactly one role; it was activated.
    Auto(String),
    /// Several roles; the user has to pick one.
    Required(Vec<String>),
    /// The token carries no role claims.
    NoRoles,
}

impl RoleSelection {
    /// Route to open after this outcome.
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Required(_) => "/home/select-role",
            Self::Auto(_) | Self::NoRoles => "/home",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub is_logged_in: bool,
    pub roles: BTreeSet<String>,
    pub active_role: Option<String>,
    pub username: Option<String>,
    pub user_id: Option<i64>,
    token: Option<String>,
    /// Set once the persisted token has been examined. Guards wait for it so
    /// server rendering never redirects a signed-in browser.
    pub ready: bool,
}

impl SessionState {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn current_user_id(&self) -> Option<i64> {
        self.user_id
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role("Admin")
    }

    /// Roles offered on the role selector, in stable order.
    pub fn available_roles(&self) -> Vec<String> {
        self.roles.iter().cloned().collect()
    }

    pub fn needs_role_selection(&self) -> bool {
        self.is_logged_in && self.active_role.is_none() && self.roles.len() > 1
    }

    fn adopt_claims(&mut self, token: &str, claims: TokenClaims) {
        self.is_logged_in = true;
        self.token = Some(token.to_owned());
        self.roles = claims.roles;
        self.user_id = claims.user_id;
        self.username = claims.username;
        self.ready = true;
    }

    fn resolve_role(&mut self, store: &impl KeyValueStore) -> RoleSelection {
        if let Some(role) = self.active_role.clone() {
            return RoleSelection::Auto(role);
        }
        match self.roles.len() {
            0 => {
                store.remove(SELECTED_ROLE_KEY);
                RoleSelection::NoRoles
            }
            1 => {
                let role = self.roles.iter().next().cloned().unwrap_or_default();
                self.active_role = Some(role.clone());
                store.set(SELECTED_ROLE_KEY, &role);
                RoleSelection::Auto(role)
            }
            _ => {
                store.remove(SELECTED_ROLE_KEY);
                RoleSelection::Required(self.available_roles())
            }
        }
    }

    /// Sign in with a freshly issued token.
    ///
    /// Any previous role choice is discarded.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError` when the token cannot be decoded; state is left
    /// untouched in that case.
    pub fn apply_token(&mut self, token: &str, store: &impl KeyValueStore) -> Result<RoleSelection, ClaimsError> {
        let claims = claims::decode(token)?;
        self.adopt_claims(token, claims);
        self.active_role = None;
        store.set(TOKEN_KEY, token);
        Ok(self.resolve_role(store))
    }

    /// Swap in a re-issued token (e.g. after role selection), keeping the
    /// active role when the new token still grants it.
    ///
    /// # Errors
    ///
    /// Returns `ClaimsError` when the token cannot be decoded.
    pub fn replace_token(&mut self, token: &str, store: &impl KeyValueStore) -> Result<RoleSelection, ClaimsError> {
        let claims = claims::decode(token)?;
        let keep = self.active_role.take().filter(|r| claims.roles.contains(r));
        self.adopt_claims(token, claims);
        store.set(TOKEN_KEY, token);
        if let Some(role) = keep {
            store.set(SELECTED_ROLE_KEY, &role);
            self.active_role = Some(role);
        }
        Ok(self.resolve_role(store))
    }

    /// Rebuild the session from storage at app start.
    ///
    /// An undecodable or expired token is dropped from storage. Always marks
    /// the state ready.
    pub fn restore(&mut self, store: &impl KeyValueStore, now_secs: u64) -> Option<RoleSelection> {
        let Some(token) = store.get(TOKEN_KEY) else {
            self.ready = true;
            return None;
        };
        let claims = match claims::decode(&token) {
            Ok(claims) if !claims.is_expired(now_secs) => claims,
            Ok(_) => {
                leptos::logging::log!("stored token expired; clearing session");
                self.clear(store);
                return None;
            }
            Err(e) => {
                leptos::logging::warn!("stored token unreadable: {e}");
                self.clear(store);
                return None;
            }
        };
        self.adopt_claims(&token, claims);
        self.active_role = store.get(SELECTED_ROLE_KEY).filter(|r| self.roles.contains(r));
        Some(self.resolve_role(store))
    }

    /// Make `role` the active role.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::RoleNotAvailable` when the token does not grant it.
    pub fn activate_role(&mut self, role: &str, store: &impl KeyValueStore) -> Result<(), ApiError> {
        if !self.roles.contains(role) {
            return Err(ApiError::RoleNotAvailable(role.to_owned()));
        }
        self.active_role = Some(role.to_owned());
        store.set(SELECTED_ROLE_KEY, role);
        Ok(())
    }

    /// Drop every session field and the persisted keys.
    pub fn clear(&mut self, store: &impl KeyValueStore) {
        *self = Self { ready: true, ..Self::default() };
        store.remove(TOKEN_KEY);
        store.remove(SELECTED_ROLE_KEY);
    }
}
