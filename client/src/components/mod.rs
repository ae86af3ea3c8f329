//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome (navigation, banners, dialogs, inline
//! errors) and read app-wide state from Leptos context providers.

pub mod banner;
pub mod confirm_dialog;
pub mod field_error;
pub mod nav_bar;
pub mod text_field;
