//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, banners)
//! and keeps its screen state in `state`, so behavior is testable without a
//! browser. Rendering details are delegated to `components`.

pub mod dashboard;
pub mod exhibition;
pub mod exhibition_details;
pub mod faq;
pub mod home;
pub mod job_portal;
pub mod leaderboard;
pub mod sign_in;
