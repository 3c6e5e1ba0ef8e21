//! Normalized REST failure type.
//!
//! ERROR HANDLING
//! ==============
//! Every failed call collapses into one `ApiError` whose `Display` text is the
//! message shown to the user. Pages never inspect status codes themselves.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("A network error occurred: {0}")]
    Network(String),
    #[error("Unauthorized. Your session may have expired or you lack permission.")]
    Unauthorized,
    #[error("You are not allowed to perform this action.")]
    Forbidden,
    #[error("The requested resource was not found.")]
    NotFound,
    /// Backend supplied its own human-readable message.
    #[error("{0}")]
    Backend(String),
    #[error("Server error: {0}")]
    Status(u16),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Login response did not include a token.")]
    MissingToken,
    #[error("Role '{0}' is not available for this account.")]
    RoleNotAvailable(String),
    #[error("User id not found. Please log in again.")]
    NoCurrentUser,
    #[error("not available on server")]
    Unavailable,
}

#[derive(Deserialize)]
struct MessageBody {
    #[serde(default)]
    message: Option<String>,
}

fn body_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    match serde_json::from_str::<MessageBody>(trimmed) {
        Ok(parsed) => parsed.message.filter(|m| !m.trim().is_empty()),
        // Plain-text error bodies come back from some endpoints (e.g. `BadRequest("...")`).
        Err(_) if !trimmed.starts_with('{') && !trimmed.starts_with('<') => {
            Some(trimmed.trim_matches('"').to_owned())
        }
        Err(_) => None,
    }
}

impl ApiError {
    /// Map a non-success status and raw body to a user-facing error.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = body_message(body);
        match (status, message) {
            (401, _) => Self::Unauthorized,
            (404, _) => Self::NotFound,
            (400, Some(m)) => Self::Backend(m),
            (403, _) => Self::Forbidden,
            (_, Some(m)) => Self::Backend(m),
            (status, None) => Self::Status(status),
        }
    }

    /// Human-readable message for notifications.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::Network(other.to_string()),
        }
    }
}
