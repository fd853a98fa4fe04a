//! Identity records shared by the browser app and the export tool.
//!
//! This crate owns the boundary contract with the identity provider: the
//! session payload it issues and the persisted user record behind it. The
//! password hash lives only on [`User`], which deliberately does not implement
//! `Serialize`; the only outward form is [`UserWithoutPassword`].


use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Error returned by [`parse_session_payload`].
#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    /// The body was not valid JSON or did not match the session shape.
    #[error("malformed session payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The user portion of an issued session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Stable user identifier.
    pub id: String,
    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Sign-in email address.
    pub email: String,
}

impl SessionUser {
    /// Name to show in UI, falling back to the email address.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(&self.email)
    }
}

/// Proof of authenticated identity issued by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    /// Instant after which the session is no longer valid.
    #[serde(with = "time::serde::rfc3339")]
    pub expires: OffsetDateTime,
}

impl Session {
    /// Whether the session has expired as of `now`.
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        self.expires <= now
    }

    /// Milliseconds from `now` until expiry, saturating at zero.
    #[must_use]
    pub fn millis_until_expiry(&self, now: OffsetDateTime) -> u64 {
        let remaining = (self.expires - now).whole_milliseconds();
        u64::try_from(remaining.max(0)).unwrap_or(u64::MAX)
    }
}

/// Decode the body of a session endpoint response.
///
/// The provider answers `{}` or `null` when nobody is signed in; both map to
/// `Ok(None)`. A body with a `user` but no `expires` is malformed.
///
/// # Errors
///
/// Returns [`IdentityError::Malformed`] if the body is neither an empty
/// response nor a valid session.
pub fn parse_session_payload(body: &str) -> Result<Option<Session>, IdentityError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value = serde_json::from_str(trimmed)?;
    let empty = match &value {
        serde_json::Value::Null => true,
        serde_json::Value::Object(map) => map.is_empty(),
        _ => false,
    };
    if empty {
        return Ok(None);
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Persisted identity record as held by the backing store.
///
/// Not serializable: convert to [`UserWithoutPassword`] before the record
/// leaves the store.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

/// Outward projection of [`User`]: every field except the password hash.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserWithoutPassword {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserWithoutPassword {
    fn from(user: User) -> Self {
        let User { id, name, email, password_hash: _, created_at, updated_at } = user;
        Self { id, name, email, created_at, updated_at }
    }
}

impl From<&UserWithoutPassword> for SessionUser {
    fn from(user: &UserWithoutPassword) -> Self {
        Self { id: user.id.clone(), name: user.name.clone(), email: user.email.clone() }
    }
}
