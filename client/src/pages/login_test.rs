use super::*;

#[test]
fn post_sign_in_target_defaults_to_profile() {
    assert_eq!(post_sign_in_target(None), "/profile");
}

#[test]
fn post_sign_in_target_follows_safe_next() {
    assert_eq!(post_sign_in_target(Some("/sets/base1")), "/sets/base1");
}

#[test]
fn post_sign_in_target_ignores_offsite_next() {
    assert_eq!(post_sign_in_target(Some("//evil.example/x")), "/profile");
    assert_eq!(post_sign_in_target(Some("https://evil.example")), "/profile");
}
