//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `notify`, `refresh`) so pages depend
//! on small focused models. Each is provided once from `App` as an
//! `RwSignal` context.

pub mod claims;
pub mod notify;
pub mod refresh;
pub mod session;
