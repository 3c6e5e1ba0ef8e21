//! Root application component with routing, guards, and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{ProtectedParentRoute, ProtectedRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::components::toasts::Toasts;
use crate::pages::{
    home::HomePage, leave_detail::LeaveDetailPage, leave_request::LeaveRequestPage, leaves::LeavesPage,
    login::LoginPage, profile::ProfilePage, profile_edit::ProfileEditPage, register::RegisterPage,
    role_select::RoleSelectPage, roles::RolesPage, user_detail::UserDetailPage, user_form::UserFormPage,
    users::UsersPage,
};
use crate::state::notify::NotifyState;
use crate::state::refresh::RefreshState;
use crate::state::session::SessionState;
use crate::util::guards::{GuardDecision, HOME_PATH, LOGIN_PATH, auth_guard, guest_guard, role_guard, route_condition};
use crate::util::session_actions;

type Guard = fn(&SessionState) -> GuardDecision;

fn signed_in(session: &SessionState) -> GuardDecision {
    auth_guard(session, HOME_PATH, &[])
}

fn admin_only(session: &SessionState) -> GuardDecision {
    auth_guard(session, HOME_PATH, &["Admin"]).and_then(|| role_guard(session, Some("Admin")))
}

fn allowed(session: RwSignal<SessionState>, guard: Guard) -> impl Fn() -> Option<bool> + Send + Sync + Clone + 'static {
    move || session.with(|s| route_condition(s, guard(s)))
}

fn redirect_to(session: RwSignal<SessionState>, guard: Guard) -> impl Fn() -> &'static str + Send + Sync + Clone + 'static {
    move || session.with_untracked(|s| guard(s).target_or(HOME_PATH))
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, notification, and refresh contexts, restores the
/// stored session once hydrated, and wires every route to its guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let notify = RwSignal::new(NotifyState::default());
    let refresh = RwSignal::new(RefreshState::default());

    provide_context(session);
    provide_context(notify);
    provide_context(refresh);

    // Effects only run in the browser, where the token lives.
    Effect::new(move || session_actions::restore(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/leavedesk.css"/>
        <Title text="LeaveDesk"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path=LOGIN_PATH/> }>
                <Route path=path!("/") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                <ProtectedRoute
                    path=path!("/login")
                    view=LoginPage
                    condition=allowed(session, guest_guard)
                    redirect_path=redirect_to(session, guest_guard)
                />
                <ProtectedRoute
                    path=path!("/register")
                    view=RegisterPage
                    condition=allowed(session, guest_guard)
                    redirect_path=redirect_to(session, guest_guard)
                />
                <ProtectedParentRoute
                    path=path!("/home")
                    view=HomePage
                    condition=allowed(session, signed_in)
                    redirect_path=redirect_to(session, signed_in)
                >
                    <Route path=path!("") view=UsersPage/>
                    <Route path=path!("users") view=UsersPage/>
                    <ProtectedRoute
                        path=path!("users/new")
                        view=UserFormPage
                        condition=allowed(session, admin_only)
                        redirect_path=redirect_to(session, admin_only)
                    />
                    <ProtectedRoute
                        path=path!("users/edit/:id")
                        view=UserFormPage
                        condition=allowed(session, admin_only)
                        redirect_path=redirect_to(session, admin_only)
                    />
                    <ProtectedRoute
                        path=path!("users/:id")
                        view=UserDetailPage
                        condition=allowed(session, admin_only)
                        redirect_path=redirect_to(session, admin_only)
                    />
                    <Route path=path!("profile") view=ProfilePage/>
                    <Route path=path!("profile/edit") view=ProfileEditPage/>
                    <Route path=path!("roles") view=RolesPage/>
                    <Route path=path!("select-role") view=RoleSelectPage/>
                    <Route path=path!("leaves") view=LeavesPage/>
                    <Route path=path!("leaves/new") view=LeaveRequestPage/>
                    <Route path=path!("leaves/:id") view=LeaveDetailPage/>
                </ProtectedParentRoute>
            </Routes>
        </Router>
        <Toasts/>
    }
}
