//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session layer (`credential_store`, `publisher`, `session`) is the only
//! cross-screen state. Every other module is a plain per-screen model that a
//! page wraps in an `RwSignal`, so the rules stay testable without a DOM.

pub mod auth_forms;
pub mod banner;
pub mod credential_store;
pub mod dashboard;
pub mod exhibition;
pub mod faq;
pub mod forms;
pub mod jobs;
pub mod leaderboard;
pub mod optimistic;
pub mod publisher;
pub mod session;
