//! # client
//!
//! Leptos + WASM frontend for LeaveDesk: sign-in, role selection, and
//! management screens for users, roles, and leave requests over the REST
//! backend.
//!
//! This crate contains pages, components, application state, the REST
//! service layer, and the route guards. The `ssr` feature renders the shell on
//! the host server; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: installs browser logging and hydrates `App`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
