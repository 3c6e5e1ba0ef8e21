use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = NotifyState::default();
    let a = state.success("saved");
    let b = state.error("failed");
    assert!(b > a);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].kind, ToastKind::Success);
    assert_eq!(state.toasts[1].message, "failed");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotifyState::default();
    let a = state.success("one");
    let b = state.success("two");
    state.dismiss(a);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, b);
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismiss() {
    let mut state = NotifyState::default();
    let a = state.success("one");
    state.dismiss(a);
    let b = state.success("two");
    assert_ne!(a, b);
}

#[test]
fn api_error_uses_normalized_message() {
    let mut state = NotifyState::default();
    state.api_error(&ApiError::NotFound);
    assert_eq!(state.toasts[0].kind, ToastKind::Error);
    assert_eq!(state.toasts[0].message, "The requested resource was not found.");
}

#[test]
fn error_toasts_outlive_success_toasts() {
    assert_eq!(ToastKind::Success.lifetime(), Duration::from_secs(3));
    assert_eq!(ToastKind::Error.lifetime(), Duration::from_secs(5));
}
