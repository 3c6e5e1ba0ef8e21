//! Role selector for tokens that grant more than one role.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::guards::HOME_PATH;
use crate::util::session_actions;

#[component]
pub fn RoleSelectPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    let pending = RwSignal::new(None::<String>);
    let chosen = RwSignal::new(false);

    Effect::new(move || {
        if chosen.get() {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let choose = move |role: String| {
        if pending.get_untracked().is_some() {
            return;
        }
        pending.set(Some(role.clone()));
        leptos::task::spawn_local(async move {
            match session_actions::select_role(session, role.clone()).await {
                Ok(()) => {
                    notify.update(|n| {
                        n.success(format!("Active role: {role}"));
                    });
                    chosen.set(true);
                }
                Err(e) => {
                    leptos::logging::warn!("role selection failed: {e}");
                    notify.update(|n| {
                        n.error(format!("Role selection failed: {}", e.message()));
                    });
                }
            }
            pending.set(None);
        });
    };

    view! {
        <section class="panel role-select">
            <h2>"Select Role"</h2>
            <p class="panel__hint">"Your account has several roles. Choose one to continue."</p>
            <Show
                when=move || session.with(|s| !s.roles.is_empty())
                fallback=|| view! { <p class="panel__empty">"Your account has no roles assigned."</p> }
            >
                <div class="role-select__options">
                    <For
                        each=move || session.with(SessionState::available_roles)
                        key=Clone::clone
                        children=move |role| {
                            let label = role.clone();
                            let is_active = {
                                let role = role.clone();
                                move || session.with(|s| s.active_role.as_deref() == Some(role.as_str()))
                            };
                            view! {
                                <button
                                    class="btn role-select__option"
                                    class:role-select__option--active=is_active
                                    disabled=move || pending.get().is_some()
                                    on:click=move |_| choose(role.clone())
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}
