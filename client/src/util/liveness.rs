//! Per-screen liveness flag.
//!
//! A request started by a screen checks the flag before writing its result
//! back, so responses that land after navigation are dropped.

#[cfg(test)]
#[path = "liveness_test.rs"]
mod liveness_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct Liveness(Arc<AtomicBool>);

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// New flag that is cleared when the current reactive owner is disposed.
    pub fn install() -> Self {
        let alive = Self::new();
        let on_drop = alive.clone();
        leptos::prelude::on_cleanup(move || on_drop.end());
        alive
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}
