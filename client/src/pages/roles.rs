//! Role management: list, inline create/rename, delete.

#[cfg(test)]
#[path = "roles_test.rs"]
mod roles_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::roles;
use crate::net::types::Role;
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;

/// Trimmed role name, rejecting blanks and case-insensitive duplicates of
/// other roles.
fn validate_role_name(name: &str, existing: &[Role], editing: Option<i64>) -> Result<String, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Role name is required.");
    }
    let taken = existing
        .iter()
        .any(|r| Some(r.id) != editing && r.name.eq_ignore_ascii_case(name));
    if taken {
        return Err("A role with that name already exists.");
    }
    Ok(name.to_owned())
}

#[component]
pub fn RolesPage() -> impl IntoView {
    let notify = expect_context::<RwSignal<NotifyState>>();
    let refresh = expect_context::<RwSignal<RefreshState>>();

    let items = RwSignal::new(Vec::<Role>::new());
    let name = RwSignal::new(String::new());
    let editing = RwSignal::new(None::<i64>);
    let delete_target = RwSignal::new(None::<Role>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        refresh.with(|r| r.roles_seq);
        leptos::task::spawn_local(async move {
            match roles::list().await {
                Ok(list) => items.set(list),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    let reset_form = move || {
        editing.set(None);
        name.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let target = editing.get_untracked();
        let valid = items.with_untracked(|list| validate_role_name(&name.get_untracked(), list, target));
        let role_name = match valid {
            Ok(n) => n,
            Err(msg) => {
                notify.update(|n| {
                    n.error(msg);
                });
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let result = match target {
                Some(id) => roles::update(id, &role_name).await.map(|()| "Role updated."),
                None => roles::create(&role_name).await.map(|_| "Role created."),
            };
            match result {
                Ok(msg) => {
                    notify.update(|n| {
                        n.success(msg);
                    });
                    reset_form();
                    refresh.update(RefreshState::roles_changed);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            busy.set(false);
        });
    };

    let on_confirm_delete = Callback::new(move |()| {
        let Some(role) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            match roles::delete(role.id).await {
                Ok(()) => {
                    notify.update(|n| {
                        n.success(format!("Deleted role {}.", role.name));
                    });
                    if editing.get_untracked() == Some(role.id) {
                        reset_form();
                    }
                    refresh.update(RefreshState::roles_changed);
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });
    let on_cancel_delete = Callback::new(move |()| delete_target.set(None));

    view! {
        <section class="panel roles">
            <header class="panel__header">
                <h2>"Roles"</h2>
            </header>
            <form class="form form--inline" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Role name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if editing.get().is_some() { "Rename" } else { "Add Role" }}
                </button>
                <Show when=move || editing.get().is_some()>
                    <button class="btn" type="button" on:click=move |_| reset_form()>
                        "Cancel"
                    </button>
                </Show>
            </form>
            <ul class="roles__list">
                <For
                    each=move || items.get()
                    key=|r| (r.id, r.name.clone())
                    children=move |role| {
                        let edit_role = role.clone();
                        let remove_role = role.clone();
                        view! {
                            <li class="roles__item">
                                <span>{role.name.clone()}</span>
                                <button
                                    class="btn"
                                    on:click=move |_| {
                                        editing.set(Some(edit_role.id));
                                        name.set(edit_role.name.clone());
                                    }
                                >
                                    "Edit"
                                </button>
                                <button
                                    class="btn btn--danger"
                                    on:click=move |_| delete_target.set(Some(remove_role.clone()))
                                >
                                    "Delete"
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete role"
                    message=delete_target
                        .get_untracked()
                        .map(|r| format!("Delete role {}?", r.name))
                        .unwrap_or_default()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}
