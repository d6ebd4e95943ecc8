use super::*;

#[test]
fn release_builds_log_errors_only() {
    assert_eq!(level_for(false), log::Level::Error);
}

#[test]
fn debug_builds_log_debug() {
    assert_eq!(level_for(true), log::Level::Debug);
}

#[test]
fn base_url_has_no_trailing_slash() {
    assert!(!API_BASE_URL.ends_with('/'));
}

#[test]
fn login_path_is_absolute() {
    assert!(LOGIN_PATH.starts_with('/'));
}
