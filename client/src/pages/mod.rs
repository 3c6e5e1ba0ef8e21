//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app::App` maps each route to one of these. Pages read the session,
//! notification, and refresh signals from context and call `net::*` for data.

pub mod home;
pub mod leave_detail;
pub mod leave_request;
pub mod leaves;
pub mod login;
pub mod profile;
pub mod profile_edit;
pub mod register;
pub mod role_select;
pub mod roles;
pub mod user_detail;
pub mod user_form;
pub mod users;
