//! Browser environment helpers.
//!
//! TRADE-OFFS
//! ==========
//! Every helper has a non-browser fallback so static generation stays
//! deterministic and side-effect free.

use time::OffsetDateTime;

/// `true` only when running hydrated in a real browser window.
pub fn is_live_browser() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Current wall-clock time.
pub fn now_utc() -> OffsetDateTime {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let nanos = (js_sys::Date::now() * 1_000_000.0) as i128;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).unwrap_or(OffsetDateTime::UNIX_EPOCH)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        OffsetDateTime::now_utc()
    }
}

/// Full-page navigation, used after sign-in so the identity provider's cookie
/// is picked up by a fresh session fetch.
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
