//! Signed-in shell: navigation, session summary, and the nested route outlet.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::guards::{LOGIN_PATH, role_selection_redirect};
use crate::util::session_actions;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct NavLink {
    href: &'static str,
    label: &'static str,
}

/// Navigation entries visible to this session.
fn nav_links(session: &SessionState) -> Vec<NavLink> {
    let mut links = Vec::new();
    if session.is_admin() {
        links.push(NavLink { href: "/home/users", label: "Users" });
        links.push(NavLink { href: "/home/roles", label: "Roles" });
    }
    links.push(NavLink { href: "/home/leaves", label: "Leave Requests" });
    links.push(NavLink { href: "/home/leaves/new", label: "New Request" });
    links.push(NavLink { href: "/home/profile", label: "Profile" });
    if session.available_roles().len() > 1 {
        links.push(NavLink { href: "/home/select-role", label: "Switch Role" });
    }
    links
}

fn role_badge(session: &SessionState) -> String {
    match &session.active_role {
        Some(role) => role.clone(),
        None if session.needs_role_selection() => "No role selected".to_owned(),
        None => "No role".to_owned(),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notify = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    let location = use_location();

    // Every nested page sits behind the role choice for multi-role tokens.
    let to_selector = navigate.clone();
    Effect::new(move || {
        let path = location.pathname.get();
        if let Some(target) = session.with(|s| role_selection_redirect(s, &path)) {
            to_selector(target, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        session_actions::logout(session);
        notify.update(|n| {
            n.success("Signed out.");
        });
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <div class="home-shell">
            <header class="home-shell__header">
                <span class="home-shell__brand">"LeaveDesk"</span>
                <nav class="home-shell__nav">
                    {move || {
                        session
                            .with(nav_links)
                            .into_iter()
                            .map(|link| view! { <A href=link.href>{link.label}</A> })
                            .collect_view()
                    }}
                </nav>
                <span class="home-shell__user">
                    {move || session.with(|s| s.username.clone().unwrap_or_default())}
                    " · "
                    <span class="role-badge">{move || session.with(role_badge)}</span>
                </span>
                <button class="btn" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="home-shell__content">
                <Outlet/>
            </main>
        </div>
    }
}
