//! `/Role` resource calls.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use super::error::ApiError;
use super::http;
use super::types::{Role, RoleCreate, RoleUpdate};

const ROLES_PATH: &str = "/Role";

fn role_path(id: i64) -> String {
    format!("{ROLES_PATH}/{id}")
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn list() -> Result<Vec<Role>, ApiError> {
    http::get_json(&format!("{ROLES_PATH}/all")).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn create(name: &str) -> Result<Role, ApiError> {
    http::post_json(ROLES_PATH, &RoleCreate { name: name.to_owned() }).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn update(id: i64, name: &str) -> Result<(), ApiError> {
    http::put_unit(&role_path(id), &RoleUpdate { id, name: name.to_owned() }).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_unit(&role_path(id)).await
}

/// Id of the role named `User`, used as the default for non-admin creation.
pub fn default_user_role_id(roles: &[Role]) -> i64 {
    const FALLBACK_USER_ROLE_ID: i64 = 2;
    roles
        .iter()
        .find(|r| r.name == "User")
        .map_or(FALLBACK_USER_ROLE_ID, |r| r.id)
}
