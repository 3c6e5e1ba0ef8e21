//! Bearer-token claim decoding.
//!
//! The payload segment is read without checking the signature; the backend
//! verifies every request, so the client only needs the claims to decide what
//! to render.

#[cfg(test)]
#[path = "claims_test.rs"]
mod claims_test;

use std::collections::BTreeSet;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Map, Value};

const ROLE_KEYS: [&str; 3] = ["role", "roles", "http://schemas.microsoft.com/ws/2008/06/identity/claims/role"];
const USER_ID_KEYS: [&str; 4] = [
    "nameid",
    "sub",
    "userId",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier",
];
const USERNAME_KEYS: [&str; 3] = [
    "unique_name",
    "name",
    "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name",
];

/// Claims the client cares about.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenClaims {
    pub roles: BTreeSet<String>,
    pub user_id: Option<i64>,
    pub username: Option<String>,
    /// Expiry in seconds since the Unix epoch.
    pub exp: Option<u64>,
}

impl TokenClaims {
    /// `true` when `exp` is present and not after `now_secs`.
    pub fn is_expired(&self, now_secs: u64) -> bool {
        self.exp.is_some_and(|exp| exp <= now_secs)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClaimsError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not base64url: {0}")]
    Encoding(String),
    #[error("token payload is not a JSON object")]
    Payload,
}

/// Decode the claims segment of a JWT.
///
/// # Errors
///
/// Returns `ClaimsError` when the token does not have three segments or its
/// payload is not a base64url-encoded JSON object.
pub fn decode(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut parts = token.split('.');
    let (Some(_header), Some(payload), Some(_sig), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(ClaimsError::Malformed);
    };
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|e| ClaimsError::Encoding(e.to_string()))?;
    let Ok(Value::Object(map)) = serde_json::from_slice::<Value>(&bytes) else {
        return Err(ClaimsError::Payload);
    };
    Ok(TokenClaims {
        roles: roles_from(&map),
        user_id: user_id_from(&map),
        username: first_string(&map, &USERNAME_KEYS),
        exp: map.get("exp").and_then(as_u64),
    })
}

fn roles_from(map: &Map<String, Value>) -> BTreeSet<String> {
    let mut roles = BTreeSet::new();
    for key in ROLE_KEYS {
        match map.get(key) {
            Some(Value::String(role)) => {
                roles.insert(role.clone());
            }
            Some(Value::Array(items)) => {
                roles.extend(items.iter().filter_map(Value::as_str).map(str::to_owned));
            }
            _ => {}
        }
    }
    roles.retain(|r| !r.trim().is_empty());
    roles
}

fn user_id_from(map: &Map<String, Value>) -> Option<i64> {
    USER_ID_KEYS.iter().find_map(|key| match map.get(*key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

fn first_string(map: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| map.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
}

fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
