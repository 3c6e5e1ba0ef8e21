//! New leave request form.

#[cfg(test)]
#[path = "leave_request_test.rs"]
mod leave_request_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::leaves;
use crate::net::types::{LEAVE_TYPES, LeaveRequestCreate, LeaveStatus};
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;
use crate::state::session::SessionState;

const LEAVES_LIST_PATH: &str = "/home/leaves";

#[derive(Clone, Debug, PartialEq, Eq)]
struct LeaveFormInput {
    type_id: String,
    start_date: String,
    end_date: String,
    reason: String,
}

impl Default for LeaveFormInput {
    fn default() -> Self {
        Self {
            type_id: LEAVE_TYPES[0].id.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            reason: String::new(),
        }
    }
}

/// Build the create body. New requests always start pending and belong to
/// the signed-in user.
fn build_leave_request(input: &LeaveFormInput, user_id: Option<i64>) -> Result<LeaveRequestCreate, &'static str> {
    let user_id = user_id.ok_or("User id not found. Please sign in again.")?;
    let type_id = input
        .type_id
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|id| LEAVE_TYPES.iter().any(|t| t.id == *id))
        .ok_or("Choose a leave type.")?;
    let start_date = input.start_date.trim();
    let end_date = input.end_date.trim();
    if start_date.is_empty() || end_date.is_empty() {
        return Err("Start and end dates are required.");
    }
    // ISO dates compare correctly as strings.
    if end_date < start_date {
        return Err("End date cannot be before start date.");
    }
    let reason = input.reason.trim();
    if reason.is_empty() {
        return Err("Reason is required.");
    }
    Ok(LeaveRequestCreate {
        type_id,
        status_id: LeaveStatus::Pending.id(),
        start_date: start_date.to_owned(),
        end_date: end_date.to_owned(),
        reason: reason.to_owned(),
        user_id,
        approved_by_id: None,
    })
}

#[component]
pub fn LeaveRequestPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let refresh = expect_context::<RwSignal<RefreshState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(LeaveFormInput::default());
    let busy = RwSignal::new(false);
    let submitted = RwSignal::new(false);

    Effect::new(move || {
        if submitted.get() {
            navigate(LEAVES_LIST_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let user_id = session.with_untracked(SessionState::current_user_id);
        let dto = match form.with_untracked(|f| build_leave_request(f, user_id)) {
            Ok(dto) => dto,
            Err(msg) => {
                notify.update(|n| {
                    n.error(msg);
                });
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match leaves::create(&dto).await {
                Ok(_) => {
                    notify.update(|n| {
                        n.success("Leave request submitted.");
                    });
                    form.set(LeaveFormInput::default());
                    refresh.update(RefreshState::leaves_changed);
                    submitted.set(true);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="panel leave-request">
            <header class="panel__header">
                <h2>"New Leave Request"</h2>
                <A href=LEAVES_LIST_PATH attr:class="btn">"Cancel"</A>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Type"
                    <select
                        prop:value=move || form.with(|f| f.type_id.clone())
                        on:change=move |ev| form.update(|f| f.type_id = event_target_value(&ev))
                    >
                        {LEAVE_TYPES
                            .iter()
                            .map(|t| view! { <option value=t.id.to_string()>{t.name}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="form__field">
                    "Start date"
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.start_date.clone())
                        on:input=move |ev| form.update(|f| f.start_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "End date"
                    <input
                        type="date"
                        prop:value=move || form.with(|f| f.end_date.clone())
                        on:input=move |ev| form.update(|f| f.end_date = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Reason"
                    <textarea
                        prop:value=move || form.with(|f| f.reason.clone())
                        on:input=move |ev| form.update(|f| f.reason = event_target_value(&ev))
                    ></textarea>
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Submit"
                </button>
            </form>
        </section>
    }
}
