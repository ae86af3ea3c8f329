//! Self-clearing success/error banner.
//!
//! DESIGN
//! ======
//! Every `show` bumps a sequence number and returns it. The delayed clear
//! passes that number back to [`BannerState::expire`], which is a no-op when a
//! newer message has replaced the one it was scheduled for.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerState {
    pub current: Option<Banner>,
    seq: u64,
}

impl BannerState {
    /// Replace the current banner; returns the token for its scheduled clear.
    pub fn show(&mut self, kind: BannerKind, text: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Banner { kind, text: text.into() });
        self.seq
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(BannerKind::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(BannerKind::Error, text)
    }

    /// Clear the banner if `seq` is still the latest. Returns whether it cleared.
    pub fn expire(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    pub fn clear(&mut self) {
        self.seq += 1;
        self.current = None;
    }

    pub fn is_error(&self) -> bool {
        self.current.as_ref().is_some_and(|b| b.kind == BannerKind::Error)
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|b| b.text.as_str())
    }
}
