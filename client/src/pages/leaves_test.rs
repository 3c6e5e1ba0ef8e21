use super::*;

fn leave(type_id: i64, type_name: &str, status_id: i64, status_name: &str) -> LeaveRequest {
    LeaveRequest {
        id: 1,
        leave_type_id: type_id,
        leave_type_name: type_name.to_owned(),
        leave_status_id: status_id,
        leave_status_name: status_name.to_owned(),
        start_date: "2026-03-02T00:00:00".to_owned(),
        end_date: "2026-03-06T00:00:00".to_owned(),
        reason: String::new(),
        user_id: 9,
        user_name: "frank".to_owned(),
        approved_by_id: None,
        approved_by_name: None,
        created_at: None,
    }
}

#[test]
fn labels_prefer_backend_names() {
    let l = leave(1, "Yıllık İzin", 2, "Onaylandı");
    assert_eq!(type_label(&l), "Yıllık İzin");
    assert_eq!(status_label(&l), "Onaylandı");
}

#[test]
fn labels_fall_back_to_catalog() {
    let l = leave(2, "", 3, "");
    assert_eq!(type_label(&l), "Sick Leave");
    assert_eq!(status_label(&l), "Rejected");
    assert_eq!(status_class(&l), "status status--rejected");
}

#[test]
fn labels_handle_unknown_ids() {
    let l = leave(42, "", 9, "");
    assert_eq!(type_label(&l), "Unknown");
    assert_eq!(status_label(&l), "Unknown");
    assert_eq!(status_class(&l), "status");
}

#[test]
fn date_range_shows_date_parts() {
    assert_eq!(date_range(&leave(1, "", 1, "")), "2026-03-02 → 2026-03-06");
}
