//! Networking: the authenticated HTTP boundary and the portal REST surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` owns request authentication and the transport seam, `error`
//! normalizes failures, `api` maps endpoints to typed calls, and `types`
//! defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
#[cfg(test)]
pub(crate) mod mock;
pub mod types;
