use super::*;

#[test]
fn with_api_base_trims_trailing_slashes() {
    let cfg = ClientConfig::with_api_base("http://portal.internal:8089//");
    assert_eq!(cfg.api_base, "http://portal.internal:8089");
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let cfg = ClientConfig::with_api_base("   ");
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn url_joins_paths_with_and_without_leading_slash() {
    let cfg = ClientConfig::with_api_base("http://h:8089");
    assert_eq!(cfg.url("/api/jobs"), "http://h:8089/api/jobs");
    assert_eq!(cfg.url("api/jobs"), "http://h:8089/api/jobs");
}

#[test]
fn detect_without_browser_uses_default_timeouts() {
    let cfg = ClientConfig::detect();
    assert_eq!(cfg.banner_timeout, BANNER_TIMEOUT);
    assert_eq!(cfg.request_timeout, REQUEST_TIMEOUT);
}
