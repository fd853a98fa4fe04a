use super::*;

#[test]
fn identity_endpoint_is_same_origin_by_default() {
    if IDENTITY_BASE.is_empty() {
        assert_eq!(identity_endpoint("/api/auth/session"), "/api/auth/session");
    }
}

#[test]
fn card_set_endpoint_formats_expected_path() {
    assert!(card_set_endpoint("base1").ends_with("/sets/base1"));
    assert!(!card_set_endpoint("base1").contains("//sets"));
}

#[test]
fn card_sets_endpoint_orders_newest_first() {
    assert!(card_sets_endpoint().ends_with("/sets?orderBy=-releaseDate"));
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("session fetch", 500), "session fetch failed: 500");
}
