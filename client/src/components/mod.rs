//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components shared across pages: the notification stack and the
//! confirmation dialog.

pub mod confirm_dialog;
pub mod toasts;
