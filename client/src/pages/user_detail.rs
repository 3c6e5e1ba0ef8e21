//! Read-only view of a single user.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::net::types::UserDetail;
use crate::net::users;
use crate::state::notify::NotifyState;
use crate::util::validate::parse_id;

#[component]
pub fn UserDetailPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let params = use_params_map();
    let user_id = Memo::new(move |_| parse_id(params.read().get("id")));
    let user = RwSignal::new(None::<UserDetail>);

    Effect::new(move || {
        let Some(id) = user_id.get() else {
            notify.update(|n| {
                n.error("Invalid user id.");
            });
            return;
        };
        leptos::task::spawn_local(async move {
            match users::get(id).await {
                Ok(detail) => user.set(Some(detail)),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    view! {
        <section class="panel user-detail">
            <header class="panel__header">
                <h2>"User Details"</h2>
                <A href="/home/users" attr:class="btn">"Back"</A>
            </header>
            {move || match user.get() {
                None => view! { <p class="panel__empty">"Loading…"</p> }.into_any(),
                Some(u) => {
                    let edit_href = format!("/home/users/edit/{}", u.id);
                    view! {
                        <dl class="detail-list">
                            <dt>"Username"</dt>
                            <dd>{u.username}</dd>
                            <dt>"Email"</dt>
                            <dd>{u.email}</dd>
                            <dt>"Roles"</dt>
                            <dd>{u.roles.join(", ")}</dd>
                            <dt>"Created"</dt>
                            <dd>{u.created_at.unwrap_or_default()}</dd>
                        </dl>
                        <A href=edit_href attr:class="btn btn--primary">"Edit"</A>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
