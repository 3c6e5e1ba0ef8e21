//! `/LeaveRequest` resource calls and the role-dependent list scope.
//!
//! DESIGN
//! ======
//! Reviewers (Admin, Leader) see every request; everybody else only sees
//! their own through `/LeaveRequest/user`, which the backend filters by the
//! bearer token.

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;

use super::error::ApiError;
use super::http;
use super::types::{LeaveRequest, LeaveRequestCreate, LeaveStatus};

const LEAVES_PATH: &str = "/LeaveRequest";

/// Roles allowed to see all requests and to approve or reject them.
pub const REVIEWER_ROLES: [&str; 2] = ["Admin", "Leader"];

/// Which list endpoint a session should read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeaveScope {
    All,
    Mine,
}

impl LeaveScope {
    pub fn for_role(active_role: Option<&str>) -> Self {
        if is_reviewer(active_role) { Self::All } else { Self::Mine }
    }

    fn path(self) -> String {
        match self {
            Self::All => LEAVES_PATH.to_owned(),
            Self::Mine => format!("{LEAVES_PATH}/user"),
        }
    }
}

pub fn is_reviewer(active_role: Option<&str>) -> bool {
    active_role.is_some_and(|r| REVIEWER_ROLES.contains(&r))
}

fn leave_path(id: i64) -> String {
    format!("{LEAVES_PATH}/{id}")
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn list(scope: LeaveScope) -> Result<Vec<LeaveRequest>, ApiError> {
    http::get_json(&scope.path()).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn get(id: i64) -> Result<LeaveRequest, ApiError> {
    http::get_json(&leave_path(id)).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn create(dto: &LeaveRequestCreate) -> Result<LeaveRequest, ApiError> {
    http::post_json(LEAVES_PATH, dto).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn update(id: i64, dto: &LeaveRequestCreate) -> Result<(), ApiError> {
    http::put_unit(&leave_path(id), dto).await
}

/// # Errors
///
/// Returns the normalized backend error.
pub async fn delete(id: i64) -> Result<(), ApiError> {
    http::delete_unit(&leave_path(id)).await
}

/// Update body that moves `leave` to `status`, recording `reviewer_id` as approver.
pub fn review_update(leave: &LeaveRequest, status: LeaveStatus, reviewer_id: i64) -> LeaveRequestCreate {
    LeaveRequestCreate {
        type_id: leave.leave_type_id,
        status_id: status.id(),
        start_date: leave.start_date.clone(),
        end_date: leave.end_date.clone(),
        reason: leave.reason.clone(),
        user_id: leave.user_id,
        approved_by_id: Some(reviewer_id),
    }
}

/// Whether the approve/reject actions apply to `leave` for this role.
pub fn can_review(leave: &LeaveRequest, active_role: Option<&str>) -> bool {
    is_reviewer(active_role) && LeaveStatus::from_id(leave.leave_status_id) == Some(LeaveStatus::Pending)
}

/// `YYYY-MM-DD` prefix of an ISO timestamp.
pub fn date_part(iso: &str) -> &str {
    iso.get(..10).unwrap_or(iso)
}
