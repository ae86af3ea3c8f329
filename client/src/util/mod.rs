//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate routing and lifecycle concerns from page logic so
//! every screen applies them the same way.

pub mod auth;
pub mod liveness;
