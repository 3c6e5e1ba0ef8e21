//! Self-service edit of username, email, and password.

#[cfg(test)]
#[path = "profile_edit_test.rs"]
mod profile_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::error::ApiError;
use crate::net::types::UserUpdate;
use crate::net::users;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::validate;

const PROFILE_PATH: &str = "/home/profile";

/// Role ids are never sent from here; users cannot change their own roles.
fn build_profile_update(username: &str, email: &str, password: &str) -> Result<UserUpdate, &'static str> {
    Ok(UserUpdate {
        username: Some(validate::required(username, "Username is required.")?),
        email: Some(validate::email(email)?),
        password: validate::optional_secret(password),
        role_ids: None,
    })
}

#[component]
pub fn ProfileEditPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    Effect::new(move || {
        if saved.get() {
            navigate(PROFILE_PATH, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        let Some(id) = session.with(SessionState::current_user_id) else {
            return;
        };
        leptos::task::spawn_local(async move {
            match users::get(id).await {
                Ok(user) => {
                    username.set(user.username);
                    email.set(user.email);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(id) = session.with_untracked(SessionState::current_user_id) else {
            notify.update(|n| {
                n.api_error(&ApiError::NoCurrentUser);
            });
            return;
        };
        let dto = match build_profile_update(&username.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
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
            match users::update(id, &dto).await {
                Ok(()) => {
                    notify.update(|n| {
                        n.success("Profile updated.");
                    });
                    password.set(String::new());
                    saved.set(true);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            busy.set(false);
        });
    };

    view! {
        <section class="panel profile-edit">
            <header class="panel__header">
                <h2>"Edit Profile"</h2>
                <A href=PROFILE_PATH attr:class="btn">"Cancel"</A>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "New password (optional)"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
        </section>
    }
}
