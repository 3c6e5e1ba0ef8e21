//! Leave request list. Reviewers see every request, everyone else their own.

#[cfg(test)]
#[path = "leaves_test.rs"]
mod leaves_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::leaves::{self, LeaveScope, date_part};
use crate::net::types::{LeaveRequest, LeaveStatus, leave_type_name};
use crate::pages::leave_detail::LeaveDetail;
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;
use crate::state::session::SessionState;

/// Backend-provided type name, falling back to the local catalog.
pub(crate) fn type_label(leave: &LeaveRequest) -> String {
    if !leave.leave_type_name.is_empty() {
        return leave.leave_type_name.clone();
    }
    leave_type_name(leave.leave_type_id).unwrap_or("Unknown").to_owned()
}

pub(crate) fn status_label(leave: &LeaveRequest) -> String {
    if !leave.leave_status_name.is_empty() {
        return leave.leave_status_name.clone();
    }
    LeaveStatus::from_id(leave.leave_status_id).map_or("Unknown", LeaveStatus::label).to_owned()
}

pub(crate) fn status_class(leave: &LeaveRequest) -> &'static str {
    match LeaveStatus::from_id(leave.leave_status_id) {
        Some(LeaveStatus::Pending) => "status status--pending",
        Some(LeaveStatus::Approved) => "status status--approved",
        Some(LeaveStatus::Rejected) => "status status--rejected",
        None => "status",
    }
}

/// `start → end` using date parts only.
pub(crate) fn date_range(leave: &LeaveRequest) -> String {
    format!("{} → {}", date_part(&leave.start_date), date_part(&leave.end_date))
}

#[component]
pub fn LeavesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let refresh = expect_context::<RwSignal<RefreshState>>();

    let items = RwSignal::new(Vec::<LeaveRequest>::new());
    let loading = RwSignal::new(true);
    let selected = RwSignal::new(None::<i64>);
    let scope = Memo::new(move |_| session.with(|s| LeaveScope::for_role(s.active_role.as_deref())));

    Effect::new(move || {
        refresh.with(|r| r.leaves_seq);
        let scope = scope.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match leaves::list(scope).await {
                Ok(list) => {
                    if let Some(id) = selected.get_untracked()
                        && !list.iter().any(|l| l.id == id)
                    {
                        selected.set(None);
                    }
                    items.set(list);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            loading.set(false);
        });
    });

    let show_owner = move || scope.get() == LeaveScope::All;

    view! {
        <section class="panel leaves">
            <header class="panel__header">
                <h2>{move || if show_owner() { "All Leave Requests" } else { "My Leave Requests" }}</h2>
                <A href="/home/leaves/new" attr:class="btn btn--primary">"New Request"</A>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p class="panel__empty">"Loading…"</p> }>
                <Show
                    when=move || items.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No leave requests yet."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <Show when=show_owner>
                                    <th>"Employee"</th>
                                </Show>
                                <th>"Type"</th>
                                <th>"Dates"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|l| (l.id, l.leave_status_id)
                                children=move |leave| {
                                    let id = leave.id;
                                    let owner = leave.user_name.clone();
                                    view! {
                                        <tr
                                            class="data-table__row"
                                            class:data-table__row--selected=move || selected.get() == Some(id)
                                            on:click=move |_| selected.set(Some(id))
                                        >
                                            <Show when=show_owner>
                                                <td>{owner.clone()}</td>
                                            </Show>
                                            <td>{type_label(&leave)}</td>
                                            <td>{date_range(&leave)}</td>
                                            <td>
                                                <span class=status_class(&leave)>{status_label(&leave)}</span>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
            <Show when=move || selected.get().is_some()>
                <LeaveDetail leave_id=Signal::derive(move || selected.get())/>
            </Show>
        </section>
    }
}
