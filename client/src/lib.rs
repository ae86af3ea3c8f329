//! # portal-client
//!
//! Leptos + WASM frontend for the company portal.
//!
//! This crate contains the session layer (credential store, session
//! publisher, request authenticator, route guard), the typed REST client,
//! per-screen state models, pages, and shared components. The `ssr` feature
//! exposes [`app::shell`] and [`app::App`] to the host process; the `hydrate`
//! feature builds the browser entry point.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging and hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("portal client starting");
    leptos::mount::hydrate_body(app::App);
}
