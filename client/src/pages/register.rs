//! Registration page. A successful registration does not sign the user in.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::types::RegisterRequest;
use crate::state::notify::NotifyState;
use crate::util::{session_actions, validate};

fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterRequest, &'static str> {
    let username = validate::required(username, "Username is required.")?;
    let email = validate::email(email)?;
    if password.is_empty() {
        return Err("Password is required.");
    }
    Ok(RegisterRequest { username, email, password: password.to_owned() })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let info = match validate_register_input(&username.get(), &email.get(), &password.get()) {
            Ok(info) => info,
            Err(msg) => {
                notify.update(|n| {
                    n.error(msg);
                });
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match session_actions::register(info).await {
                Ok(message) => {
                    notify.update(|n| {
                        n.success(message);
                    });
                    username.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create Account"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <A href="/login">"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
