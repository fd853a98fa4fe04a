//! HTTP helpers for the identity provider and the card data API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Static generation: stubs returning `None`/error, since nothing may be
//! fetched while shells are rendered at build time.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so session and data
//! fetch failures degrade UI behavior without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CardSet, Session};

/// Origin of the identity provider; empty means same origin.
pub const IDENTITY_BASE: &str = match option_env!("CARDBINDER_IDENTITY_BASE") {
    Some(base) => base,
    None => "",
};

/// Origin of the card data API.
pub const CARD_API_BASE: &str = match option_env!("CARDBINDER_CARD_API_BASE") {
    Some(base) => base,
    None => "https://api.pokemontcg.io/v2",
};

#[cfg(any(test, feature = "hydrate"))]
fn identity_endpoint(path: &str) -> String {
    format!("{}{path}", IDENTITY_BASE.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn card_set_endpoint(set_id: &str) -> String {
    format!("{}/sets/{set_id}", CARD_API_BASE.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn card_sets_endpoint() -> String {
    format!("{}/sets?orderBy=-releaseDate", CARD_API_BASE.trim_end_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

#[cfg(feature = "hydrate")]
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Fetch the anti-forgery token the provider requires on every auth POST.
#[cfg(feature = "hydrate")]
async fn fetch_csrf_token() -> Result<String, String> {
    let resp = gloo_net::http::Request::get(&identity_endpoint("/api/auth/csrf"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("csrf fetch", resp.status()));
    }
    let csrf: super::types::CsrfResponse = resp.json().await.map_err(|e| e.to_string())?;
    Ok(csrf.csrf_token)
}

/// Read the current session from `GET /api/auth/session`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is not a session.
pub async fn fetch_session() -> Result<Option<Session>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&identity_endpoint("/api/auth/session"))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("session fetch", resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        identity::parse_session_payload(&body).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available during static generation".to_owned())
    }
}

/// Sign in with email + password via `POST /api/auth/callback/credentials`.
///
/// The provider wants a form body carrying the token from `/api/auth/csrf`.
///
/// # Errors
///
/// Returns an error string if the request fails or the credentials are rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let csrf_token = fetch_csrf_token().await?;
        let body = super::types::CredentialsRequest { email, password, csrf_token: &csrf_token };
        let resp = gloo_net::http::Request::post(&identity_endpoint("/api/auth/callback/credentials"))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(body.to_form())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 401 {
            return Err("Invalid email or password.".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("sign in", resp.status()));
        }
        let redirect: super::types::RedirectResponse = resp.json().await.unwrap_or_default();
        if redirect.is_error() {
            return Err("Invalid email or password.".to_owned());
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available during static generation".to_owned())
    }
}

/// End the session via `POST /api/auth/signout` (form body with CSRF token).
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let csrf_token = fetch_csrf_token().await?;
        let resp = gloo_net::http::Request::post(&identity_endpoint("/api/auth/signout"))
            .header("Content-Type", FORM_CONTENT_TYPE)
            .body(super::types::sign_out_form(&csrf_token))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("sign out", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available during static generation".to_owned())
    }
}

/// Ask the identity provider to email a reset link via `POST /api/password/reset`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn request_password_reset(email: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::PasswordResetRequest { email };
        let resp = gloo_net::http::Request::post(&identity_endpoint("/api/password/reset"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("reset request", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        Err("not available during static generation".to_owned())
    }
}

/// Set a new password with a one-time token via `POST /api/password/confirm`.
///
/// The token is validated by the identity provider, never by the page.
///
/// # Errors
///
/// Returns an error string if the request fails or the token is rejected.
pub async fn confirm_password_reset(id: &str, token: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = super::types::PasswordConfirmRequest { id, token, password };
        let resp = gloo_net::http::Request::post(&identity_endpoint("/api/password/confirm"))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if matches!(resp.status(), 400 | 404 | 410) {
            return Err("This reset link is invalid or has expired.".to_owned());
        }
        if !resp.ok() {
            return Err(request_failed_message("password reset", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token, password);
        Err("not available during static generation".to_owned())
    }
}

/// Fetch one card set by id.
///
/// # Errors
///
/// Returns an error string if the request fails or the set does not exist.
pub async fn fetch_card_set(set_id: &str) -> Result<CardSet, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&card_set_endpoint(set_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Err(format!("No set named \"{set_id}\"."));
        }
        if !resp.ok() {
            return Err(request_failed_message("set fetch", resp.status()));
        }
        let body: super::types::DataEnvelope<CardSet> = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = set_id;
        Err("not available during static generation".to_owned())
    }
}

/// Fetch all card sets, newest first.
pub async fn fetch_card_sets() -> Option<Vec<CardSet>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&card_sets_endpoint()).send().await.ok()?;
        if !resp.ok() {
            log::warn!("{}", request_failed_message("set list", resp.status()));
            return None;
        }
        let body: super::types::DataEnvelope<Vec<CardSet>> = resp.json().await.ok()?;
        Some(body.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
