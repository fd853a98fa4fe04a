//! Form input validation shared by the sign-in and password pages.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Trim and require a plausible email address.
///
/// # Errors
///
/// Returns the message to show when the value is empty or has no `@`.
pub fn validate_email(raw: &str) -> Result<String, &'static str> {
    let email = raw.trim();
    if email.is_empty() {
        return Err("Enter your email address.");
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email.to_owned()),
        _ => Err("Enter a valid email address."),
    }
}

/// Validate sign-in credentials. The password is not trimmed.
///
/// # Errors
///
/// Returns the message to show for a bad email or an empty password.
pub fn validate_credentials(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = validate_email(email)?;
    if password.is_empty() {
        return Err("Enter your password.");
    }
    Ok((email, password.to_owned()))
}

/// Validate a new password and its confirmation.
///
/// # Errors
///
/// Returns the message to show when the password is too short or the two
/// entries differ.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}
