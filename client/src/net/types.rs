//! Wire DTOs for the identity provider and the card data API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub use identity::{Session, SessionUser};

/// A card set as returned by the card data API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub total: u32,
    /// Raw release date string as supplied by the API.
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Envelope used by the card data API for every response.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}

/// Answer of `GET /api/auth/csrf`.
#[derive(Debug, Deserialize)]
pub struct CsrfResponse {
    #[serde(rename = "csrfToken")]
    pub csrf_token: String,
}

/// Answer of the credentials callback and sign-out when posted with
/// `json=true`. A rejected sign-in points `url` at the error page.
#[derive(Debug, Default, Deserialize)]
pub struct RedirectResponse {
    #[serde(default)]
    pub url: Option<String>,
}

impl RedirectResponse {
    /// Whether the provider redirected to its error page.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.url.as_deref().is_some_and(|url| url.contains("error="))
    }
}

/// Form body for `POST /api/auth/callback/credentials`.
#[derive(Debug)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub csrf_token: &'a str,
}

impl CredentialsRequest<'_> {
    #[must_use]
    pub fn to_form(&self) -> String {
        encode_form(&[
            ("email", self.email),
            ("password", self.password),
            ("csrfToken", self.csrf_token),
            ("json", "true"),
        ])
    }
}

/// Form body for `POST /api/auth/signout`.
#[must_use]
pub fn sign_out_form(csrf_token: &str) -> String {
    encode_form(&[("csrfToken", csrf_token), ("json", "true")])
}

/// `application/x-www-form-urlencoded` body from ordered pairs.
#[must_use]
pub fn encode_form(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Body for `POST /api/password/reset`.
#[derive(Debug, Serialize)]
pub struct PasswordResetRequest<'a> {
    pub email: &'a str,
}

/// Body for `POST /api/password/confirm`.
#[derive(Debug, Serialize)]
pub struct PasswordConfirmRequest<'a> {
    pub id: &'a str,
    pub token: &'a str,
    pub password: &'a str,
}
