//! Auth endpoints: login, registration, and active-role selection.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>`; the session actions turn the error into a
//! notification and leave session state untouched.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::http;
use super::types::{ApiResponse, LoginRequest, RegisterRequest, SelectRoleRequest, SelectRoleResponse};

const LOGIN_PATH: &str = "/Auth/login";
const REGISTER_PATH: &str = "/Auth/register";
const SELECT_ROLE_PATH: &str = "/Auth/select-role";

/// `POST /Auth/login`.
///
/// # Errors
///
/// Returns the normalized backend error, or `ApiError::MissingToken` when the
/// response carried no token.
pub async fn login(credentials: &LoginRequest) -> Result<ApiResponse, ApiError> {
    let resp: ApiResponse = http::post_json(LOGIN_PATH, credentials).await?;
    ensure_token(resp)
}

fn ensure_token(resp: ApiResponse) -> Result<ApiResponse, ApiError> {
    if resp.token().is_none() {
        return Err(ApiError::MissingToken);
    }
    Ok(resp)
}

/// `POST /Auth/register`. Returns the backend's confirmation message.
///
/// # Errors
///
/// Returns the normalized backend error.
pub async fn register(info: &RegisterRequest) -> Result<String, ApiError> {
    let resp: ApiResponse = http::post_json(REGISTER_PATH, info).await?;
    Ok(register_message(&resp))
}

fn register_message(resp: &ApiResponse) -> String {
    if resp.message.trim().is_empty() {
        "Registration completed.".to_owned()
    } else {
        resp.message.clone()
    }
}

/// `POST /Auth/select-role`.
///
/// # Errors
///
/// Returns the normalized backend error, or `ApiError::Backend` when the
/// backend answered with `success: false`.
pub async fn select_role(role: &str) -> Result<SelectRoleResponse, ApiError> {
    let body = SelectRoleRequest { selected_role: role.to_owned() };
    let resp: SelectRoleResponse = http::post_json(SELECT_ROLE_PATH, &body).await?;
    ensure_role_accepted(resp)
}

fn ensure_role_accepted(resp: SelectRoleResponse) -> Result<SelectRoleResponse, ApiError> {
    if resp.success {
        return Ok(resp);
    }
    Err(ApiError::Backend(
        resp.message.unwrap_or_else(|| "Role selection was rejected.".to_owned()),
    ))
}
