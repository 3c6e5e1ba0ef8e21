//! Single leave request with review and cancel actions.
//!
//! DESIGN
//! ======
//! Rendered both as the side panel of the leave list and as the standalone
//! `/home/leaves/:id` route. Every mutation bumps `RefreshState::leaves_seq`
//! so the list reloads itself.

#[cfg(test)]
#[path = "leave_detail_test.rs"]
mod leave_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::error::ApiError;
use crate::net::leaves::{self, can_review, date_part, review_update};
use crate::net::types::{LeaveRequest, LeaveStatus};
use crate::pages::leaves::{date_range, status_class, status_label, type_label};
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;
use crate::state::session::SessionState;
use crate::util::validate::parse_id;

/// Owners may withdraw their own request while it is still pending.
fn can_cancel(leave: &LeaveRequest, user_id: Option<i64>) -> bool {
    user_id == Some(leave.user_id) && LeaveStatus::from_id(leave.leave_status_id) == Some(LeaveStatus::Pending)
}

fn review_message(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "Leave request approved.",
        LeaveStatus::Rejected => "Leave request rejected.",
        LeaveStatus::Pending => "Leave request updated.",
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Review(LeaveStatus),
    Cancel,
}

#[component]
pub fn LeaveDetail(#[prop(into)] leave_id: Signal<Option<i64>>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let refresh = expect_context::<RwSignal<RefreshState>>();

    let leave = RwSignal::new(None::<LeaveRequest>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        refresh.with(|r| r.leaves_seq);
        let Some(id) = leave_id.get() else {
            leave.set(None);
            return;
        };
        leptos::task::spawn_local(async move {
            match leaves::get(id).await {
                Ok(found) => leave.set(Some(found)),
                Err(ApiError::NotFound) => leave.set(None),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    let run = move |action: Action| {
        if busy.get_untracked() {
            return;
        }
        let Some(current) = leave.get_untracked() else {
            return;
        };
        let Some(me) = session.with_untracked(SessionState::current_user_id) else {
            notify.update(|n| {
                n.api_error(&ApiError::NoCurrentUser);
            });
            return;
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match action {
                Action::Review(status) => leaves::update(current.id, &review_update(&current, status, me))
                    .await
                    .map(|()| review_message(status)),
                Action::Cancel => leaves::delete(current.id).await.map(|()| "Leave request cancelled."),
            };
            match result {
                Ok(msg) => {
                    notify.update(|n| {
                        n.success(msg);
                    });
                    refresh.update(RefreshState::leaves_changed);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            busy.set(false);
        });
    };

    let reviewable = move || {
        let role = session.with(|s| s.active_role.clone());
        leave.with(|l| l.as_ref().is_some_and(|l| can_review(l, role.as_deref())))
    };
    let cancellable = move || {
        let me = session.with(SessionState::current_user_id);
        leave.with(|l| l.as_ref().is_some_and(|l| can_cancel(l, me)))
    };

    view! {
        <aside class="panel leave-detail">
            {move || match leave.get() {
                None => view! { <p class="panel__empty">"Leave request not found."</p> }.into_any(),
                Some(l) => view! {
                    <h3>{type_label(&l)}</h3>
                    <dl class="detail-list">
                        <dt>"Employee"</dt>
                        <dd>{l.user_name.clone()}</dd>
                        <dt>"Dates"</dt>
                        <dd>{date_range(&l)}</dd>
                        <dt>"Status"</dt>
                        <dd><span class=status_class(&l)>{status_label(&l)}</span></dd>
                        <dt>"Reason"</dt>
                        <dd>{l.reason.clone()}</dd>
                        <dt>"Reviewed by"</dt>
                        <dd>{l.approved_by_name.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                        <dt>"Submitted"</dt>
                        <dd>{l.created_at.as_deref().map(date_part).unwrap_or("-").to_owned()}</dd>
                    </dl>
                }
                    .into_any(),
            }}
            <div class="leave-detail__actions">
                <Show when=reviewable>
                    <button
                        class="btn btn--primary"
                        disabled=move || busy.get()
                        on:click=move |_| run(Action::Review(LeaveStatus::Approved))
                    >
                        "Approve"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=move |_| run(Action::Review(LeaveStatus::Rejected))
                    >
                        "Reject"
                    </button>
                </Show>
                <Show when=cancellable>
                    <button class="btn" disabled=move || busy.get() on:click=move |_| run(Action::Cancel)>
                        "Cancel Request"
                    </button>
                </Show>
            </div>
        </aside>
    }
}

/// Route wrapper for `/home/leaves/:id`.
#[component]
pub fn LeaveDetailPage() -> impl IntoView {
    let params = use_params_map();
    let leave_id = Signal::derive(move || parse_id(params.read().get("id")));

    view! {
        <section class="panel">
            <header class="panel__header">
                <h2>"Leave Request"</h2>
                <A href="/home/leaves" attr:class="btn">"Back"</A>
            </header>
            <LeaveDetail leave_id=leave_id/>
        </section>
    }
}
