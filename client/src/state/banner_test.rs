use super::*;

#[test]
fn expire_clears_matching_banner() {
    let mut banner = BannerState::default();
    let seq = banner.success("Saved");
    assert_eq!(banner.text(), Some("Saved"));
    assert!(banner.expire(seq));
    assert_eq!(banner.current, None);
}

#[test]
fn newer_message_supersedes_pending_clear() {
    let mut banner = BannerState::default();
    let first = banner.success("Saved");
    let _second = banner.error("Failed");
    assert!(!banner.expire(first));
    assert!(banner.is_error());
    assert_eq!(banner.text(), Some("Failed"));
}

#[test]
fn manual_clear_invalidates_pending_expiry() {
    let mut banner = BannerState::default();
    let seq = banner.success("Saved");
    banner.clear();
    assert!(!banner.expire(seq));
}
