//! Create/edit form for users.
//!
//! DESIGN
//! ======
//! The same component serves `/home/users/new` and `/home/users/edit/:id`.
//! Only admins see the role checkboxes; a non-admin creating a user gets the
//! `User` role. On edit the password is sent only when typed, and role ids only
//! when the editor is an admin.

#[cfg(test)]
#[path = "user_form_test.rs"]
mod user_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net::types::{Role, UserCreate, UserUpdate};
use crate::net::{roles, users};
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;
use crate::state::session::SessionState;
use crate::util::validate;

const USERS_LIST_PATH: &str = "/home/users";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Submission {
    Create(UserCreate),
    Update(i64, UserUpdate),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct UserFormInput {
    username: String,
    email: String,
    password: String,
    role_ids: Vec<i64>,
}

fn validate_user_form(input: &UserFormInput, edit_mode: bool) -> Result<(String, String), &'static str> {
    let username = validate::required(&input.username, "Username is required.")?;
    let email = validate::email(&input.email)?;
    if !edit_mode && input.password.is_empty() {
        return Err("Password is required.");
    }
    Ok((username, email))
}

fn build_user_create(input: &UserFormInput, is_admin: bool, roles: &[Role]) -> Result<UserCreate, &'static str> {
    let (username, email) = validate_user_form(input, false)?;
    let role_ids = if is_admin {
        if input.role_ids.is_empty() {
            return Err("Select at least one role.");
        }
        input.role_ids.clone()
    } else {
        vec![roles::default_user_role_id(roles)]
    };
    Ok(UserCreate { username, email, password: input.password.clone(), role_ids })
}

fn build_user_update(input: &UserFormInput, is_admin: bool) -> Result<UserUpdate, &'static str> {
    let (username, email) = validate_user_form(input, true)?;
    Ok(UserUpdate {
        username: Some(username),
        email: Some(email),
        password: validate::optional_secret(&input.password),
        role_ids: is_admin.then(|| input.role_ids.clone()),
    })
}

fn build_submission(
    input: &UserFormInput,
    edit_id: Option<i64>,
    is_admin: bool,
    roles: &[Role],
) -> Result<Submission, &'static str> {
    match edit_id {
        Some(id) => build_user_update(input, is_admin).map(|dto| Submission::Update(id, dto)),
        None => build_user_create(input, is_admin, roles).map(Submission::Create),
    }
}

fn toggle_role(ids: &mut Vec<i64>, id: i64, checked: bool) {
    if checked {
        if !ids.contains(&id) {
            ids.push(id);
        }
    } else {
        ids.retain(|existing| *existing != id);
    }
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let refresh = expect_context::<RwSignal<RefreshState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let edit_id = Memo::new(move |_| validate::parse_id(params.read().get("id")));
    let form = RwSignal::new(UserFormInput::default());
    let available_roles = RwSignal::new(Vec::<Role>::new());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let is_admin = move || session.with(SessionState::is_admin);

    Effect::new(move || {
        if saved.get() {
            navigate(USERS_LIST_PATH, NavigateOptions::default());
        }
    });

    Effect::new(move || {
        refresh.with(|r| r.roles_seq);
        if !session.with(SessionState::is_admin) {
            return;
        }
        leptos::task::spawn_local(async move {
            match roles::list().await {
                Ok(list) => available_roles.set(list),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    Effect::new(move || {
        let Some(id) = edit_id.get() else {
            form.set(UserFormInput::default());
            return;
        };
        leptos::task::spawn_local(async move {
            match users::get(id).await {
                Ok(user) => form.set(UserFormInput {
                    username: user.username,
                    email: user.email,
                    password: String::new(),
                    role_ids: user.role_ids,
                }),
                Err(e) => notify.update(|n| {
                    n.api_error(&e);
                }),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let admin = is_admin();
        let submission = match build_submission(
            &form.get_untracked(),
            edit_id.get_untracked(),
            admin,
            &available_roles.get_untracked(),
        ) {
            Ok(submission) => submission,
            Err(msg) => {
                notify.update(|n| {
                    n.error(msg);
                });
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            let is_update = matches!(submission, Submission::Update(..));
            let result = match submission {
                Submission::Update(id, dto) => users::update(id, &dto).await.map(|()| "User updated."),
                Submission::Create(dto) => users::create(&dto).await.map(|_| "User created."),
            };
            match result {
                Ok(msg) => {
                    notify.update(|n| {
                        n.success(msg);
                    });
                    if is_update && admin {
                        refresh.update(RefreshState::roles_changed);
                    }
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
        <section class="panel user-form">
            <header class="panel__header">
                <h2>{move || if edit_id.get().is_some() { "Edit User" } else { "New User" }}</h2>
                <A href=USERS_LIST_PATH attr:class="btn">"Cancel"</A>
            </header>
            <form class="form" on:submit=on_submit>
                <label class="form__field">
                    "Username"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    "Email"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    {move || {
                        if edit_id.get().is_some() { "Password (leave blank to keep)" } else { "Password" }
                    }}
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </label>
                <Show when=is_admin>
                    <fieldset class="form__roles">
                        <legend>"Roles"</legend>
                        <For
                            each=move || available_roles.get()
                            key=|r| r.id
                            children=move |role| {
                                let id = role.id;
                                view! {
                                    <label class="form__check">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || form.with(|f| f.role_ids.contains(&id))
                                            on:change=move |ev| {
                                                let checked = event_target_checked(&ev);
                                                form.update(|f| toggle_role(&mut f.role_ids, id, checked));
                                            }
                                        />
                                        {role.name}
                                    </label>
                                }
                            }
                        />
                    </fieldset>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
        </section>
    }
}
