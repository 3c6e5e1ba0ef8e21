//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns the request helpers and bearer interceptor, `error` the
//! normalized failure type, and `types` the shared wire schema. `api` covers
//! the auth endpoints; `users`, `roles`, and `leaves` are one module per
//! resource.

pub mod api;
pub mod error;
pub mod http;
pub mod leaves;
pub mod roles;
pub mod types;
pub mod users;
