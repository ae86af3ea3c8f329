//! Self-clearing status banner shared by every screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages create one [`Flash`] and render it with [`BannerView`]. Each message
//! schedules its own clear after the configured banner timeout; a newer
//! message makes the older clear a no-op.

use std::time::Duration;

use leptos::prelude::*;

use crate::config::{BANNER_TIMEOUT, ClientConfig};
use crate::state::banner::{BannerKind, BannerState};

/// Handle for showing banner messages from event handlers and tasks.
#[derive(Clone, Copy, Debug)]
pub struct Flash {
    pub state: RwSignal<BannerState>,
    timeout: Duration,
}

impl Flash {
    /// Create a banner owned by the current component.
    pub fn new() -> Self {
        let timeout = use_context::<ClientConfig>().map_or(BANNER_TIMEOUT, |c| c.banner_timeout);
        Self { state: RwSignal::new(BannerState::default()), timeout }
    }

    pub fn success(self, text: impl Into<String>) {
        self.show(BannerKind::Success, text.into());
    }

    pub fn error(self, text: impl Into<String>) {
        self.show(BannerKind::Error, text.into());
    }

    pub fn clear(self) {
        self.state.try_update(BannerState::clear);
    }

    fn show(self, kind: BannerKind, text: String) {
        if kind == BannerKind::Error {
            log::warn!("banner: {text}");
        }
        let Some(seq) = self.state.try_update(|b| b.show(kind, text)) else {
            return;
        };
        self.schedule_expiry(seq);
    }

    fn schedule_expiry(self, seq: u64) {
        #[cfg(feature = "hydrate")]
        {
            let ms = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
            let state = self.state;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(ms).await;
                state.try_update(|b| b.expire(seq));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (seq, self.timeout);
        }
    }
}

impl Default for Flash {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn BannerView(flash: Flash) -> impl IntoView {
    let state = flash.state;
    let class = move || {
        if state.get().is_error() { "banner banner--error" } else { "banner banner--success" }
    };

    view! {
        <Show when=move || state.get().current.is_some()>
            <div class=class role="status">
                <span class="banner__text">{move || state.get().text().unwrap_or_default().to_owned()}</span>
                <button class="banner__close" title="Dismiss" on:click=move |_| flash.clear()>
                    "×"
                </button>
            </div>
        </Show>
    }
}
