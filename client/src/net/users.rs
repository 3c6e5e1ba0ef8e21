//! `/User` resource calls.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use super::error::ApiError;
use super::http;
use super::types::{UserCreate, UserDetail, UserUpdate};

const USERS_PATH: &str = "/User";

fn user_path(id: i64) -> String {
    format!("{USERS_PATH}/{id}")
}

fn all_users_path() -> String {
    format!("{USERS_PATH}/all")
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn list() -> Result<Vec<UserDetail>, ApiError> {
    http::get_json(&all_users_path()).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn get(id: i64) -> Result<UserDetail, ApiError> {
    http::get_json(&user_path(id)).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn create(user: &UserCreate) -> Result<UserDetail, ApiError> {
    http::post_json(USERS_PATH, user).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn update(id: i64, user: &UserUpdate) -> Result<(), ApiError> {
    http::put_unit(&user_path(id), user).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_unit(&user_path(id)).await
}
