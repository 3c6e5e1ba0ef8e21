//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guards, session actions, browser storage, and form validation.
//! Everything here except the async actions is a plain function over
//! `SessionState` or strings.

pub mod guards;
pub mod session_actions;
pub mod storage;
pub mod validate;
