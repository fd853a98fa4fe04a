use super::*;

#[test]
fn validate_email_trims_and_requires_value() {
    assert_eq!(validate_email("  ash@example.com "), Ok("ash@example.com".to_owned()));
    assert_eq!(validate_email("   "), Err("Enter your email address."));
}

#[test]
fn validate_email_requires_both_sides_of_at() {
    assert_eq!(validate_email("ash"), Err("Enter a valid email address."));
    assert_eq!(validate_email("@example.com"), Err("Enter a valid email address."));
    assert_eq!(validate_email("ash@"), Err("Enter a valid email address."));
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    assert_eq!(
        validate_credentials(" a@b.com ", " pass word "),
        Ok(("a@b.com".to_owned(), " pass word ".to_owned()))
    );
    assert_eq!(validate_credentials("a@b.com", ""), Err("Enter your password."));
}

#[test]
fn validate_new_password_enforces_length() {
    assert_eq!(validate_new_password("short", "short"), Err("Password must be at least 8 characters."));
    assert_eq!(validate_new_password("12345678", "12345678"), Ok("12345678".to_owned()));
}

#[test]
fn validate_new_password_counts_characters_not_bytes() {
    assert_eq!(validate_new_password("ééééééé", "ééééééé"), Err("Password must be at least 8 characters."));
}

#[test]
fn validate_new_password_requires_match() {
    assert_eq!(validate_new_password("correct-horse", "correct-h0rse"), Err("Passwords do not match."));
}
