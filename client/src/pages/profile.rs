//! Current user's profile, read from `/User/{id}` using the token's user id.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::error::ApiError;
use crate::net::types::UserDetail;
use crate::net::users;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let profile = RwSignal::new(None::<UserDetail>);

    Effect::new(move || {
        let Some(id) = session.with(SessionState::current_user_id) else {
            if session.with(|s| s.ready) {
                notify.update(|n| {
                    n.api_error(&ApiError::NoCurrentUser);
                });
            }
            return;
        };
        leptos::task::spawn_local(async move {
            match users::get(id).await {
                Ok(user) => profile.set(Some(user)),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    view! {
        <section class="panel profile">
            <header class="panel__header">
                <h2>"My Profile"</h2>
                <A href="/home/profile/edit" attr:class="btn btn--primary">"Edit Profile"</A>
            </header>
            {move || match profile.get() {
                None => view! { <p class="panel__empty">"Loading…"</p> }.into_any(),
                Some(user) => view! {
                    <dl class="detail-list">
                        <dt>"Username"</dt>
                        <dd>{user.username}</dd>
                        <dt>"Email"</dt>
                        <dd>{user.email}</dd>
                        <dt>"Roles"</dt>
                        <dd>{user.roles.join(", ")}</dd>
                        <dt>"Active role"</dt>
                        <dd>{move || session.with(|s| s.active_role.clone().unwrap_or_default())}</dd>
                    </dl>
                }
                    .into_any(),
            }}
        </section>
    }
}
