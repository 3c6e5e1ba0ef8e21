//! User list with admin edit/delete actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::net::types::UserDetail;
use crate::net::users;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn UsersPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let items = RwSignal::new(Vec::<UserDetail>::new());
    let loading = RwSignal::new(true);
    let reload = RwSignal::new(0_u64);
    let delete_target = RwSignal::new(None::<UserDetail>);

    Effect::new(move || {
        reload.get();
        loading.set(true);
        leptos::task::spawn_local(async move {
            match users::list().await {
                Ok(list) => items.set(list),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
            loading.set(false);
        });
    });

    let on_confirm_delete = Callback::new(move |()| {
        let Some(user) = delete_target.get_untracked() else {
            return;
        };
        delete_target.set(None);
        leptos::task::spawn_local(async move {
            match users::delete(user.id).await {
                Ok(()) => {
                    notify.update(|n| {
                        n.success(format!("Deleted {}.", user.username));
                    });
                    reload.update(|r| *r = r.wrapping_add(1));
                }
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });
    let on_cancel_delete = Callback::new(move |()| delete_target.set(None));

    let is_admin = move || session.with(SessionState::is_admin);

    view! {
        <section class="panel users">
            <header class="panel__header">
                <h2>"Users"</h2>
                <Show when=is_admin>
                    <A href="/home/users/new" attr:class="btn btn--primary">"New User"</A>
                </Show>
            </header>
            <Show when=move || !loading.get() fallback=|| view! { <p class="panel__empty">"Loading…"</p> }>
                <Show
                    when=move || items.with(|list| !list.is_empty())
                    fallback=|| view! { <p class="panel__empty">"No users found."</p> }
                >
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Username"</th>
                                <th>"Email"</th>
                                <th>"Roles"</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || items.get()
                                key=|u| u.id
                                children=move |user| {
                                    let detail_href = format!("/home/users/{}", user.id);
                                    let edit_href = format!("/home/users/edit/{}", user.id);
                                    let target = user.clone();
                                    view! {
                                        <tr>
                                            <td>
                                                <A href=detail_href>{user.username.clone()}</A>
                                            </td>
                                            <td>{user.email.clone()}</td>
                                            <td>{user.roles.join(", ")}</td>
                                            <td class="data-table__actions">
                                                <Show when=is_admin>
                                                    <A href=edit_href.clone() attr:class="btn">"Edit"</A>
                                                    <button
                                                        class="btn btn--danger"
                                                        on:click={
                                                            let target = target.clone();
                                                            move |_| delete_target.set(Some(target.clone()))
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>
            <Show when=move || delete_target.get().is_some()>
                <ConfirmDialog
                    title="Delete user"
                    message=delete_target
                        .get_untracked()
                        .map(|u| format!("Delete {}? This cannot be undone.", u.username))
                        .unwrap_or_default()
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            </Show>
        </section>
    }
}
