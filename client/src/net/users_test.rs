use super::*;

#[test]
fn user_paths_format_ids() {
    assert_eq!(all_users_path(), "/User/all");
    assert_eq!(user_path(12), "/User/12");
}
