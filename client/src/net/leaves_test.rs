use super::*;

fn pending_leave() -> LeaveRequest {
    LeaveRequest {
        id: 11,
        leave_type_id: 2,
        leave_type_name: "Sick Leave".to_owned(),
        leave_status_id: 1,
        leave_status_name: "Pending".to_owned(),
        start_date: "2026-03-02T00:00:00".to_owned(),
        end_date: "2026-03-04T00:00:00".to_owned(),
        reason: "flu".to_owned(),
        user_id: 9,
        user_name: "dana".to_owned(),
        approved_by_id: None,
        approved_by_name: None,
        created_at: None,
    }
}

#[test]
fn scope_is_all_for_admin_and_leader() {
    assert_eq!(LeaveScope::for_role(Some("Admin")), LeaveScope::All);
    assert_eq!(LeaveScope::for_role(Some("Leader")), LeaveScope::All);
}

#[test]
fn scope_is_mine_for_other_roles_or_none() {
    assert_eq!(LeaveScope::for_role(Some("User")), LeaveScope::Mine);
    assert_eq!(LeaveScope::for_role(Some("admin")), LeaveScope::Mine);
    assert_eq!(LeaveScope::for_role(None), LeaveScope::Mine);
}

#[test]
fn scope_paths_match_backend_routes() {
    assert_eq!(LeaveScope::All.path(), "/LeaveRequest");
    assert_eq!(LeaveScope::Mine.path(), "/LeaveRequest/user");
    assert_eq!(leave_path(4), "/LeaveRequest/4");
}

#[test]
fn review_update_keeps_request_fields_and_sets_approver() {
    let leave = pending_leave();
    let dto = review_update(&leave, LeaveStatus::Approved, 1);
    assert_eq!(dto.status_id, 2);
    assert_eq!(dto.approved_by_id, Some(1));
    assert_eq!(dto.type_id, 2);
    assert_eq!(dto.user_id, 9);
    assert_eq!(dto.start_date, leave.start_date);
    assert_eq!(dto.reason, "flu");

    let rejected = review_update(&leave, LeaveStatus::Rejected, 1);
    assert_eq!(rejected.status_id, 3);
}

#[test]
fn can_review_requires_reviewer_and_pending() {
    let mut leave = pending_leave();
    assert!(can_review(&leave, Some("Leader")));
    assert!(!can_review(&leave, Some("User")));
    assert!(!can_review(&leave, None));
    leave.leave_status_id = LeaveStatus::Approved.id();
    assert!(!can_review(&leave, Some("Admin")));
}

#[test]
fn date_part_truncates_timestamps() {
    assert_eq!(date_part("2026-03-02T00:00:00"), "2026-03-02");
    assert_eq!(date_part("2026-03"), "2026-03");
}
