//! Run-time path segment resolution.
//!
//! A static shell is rendered with a placeholder URL, so the router params
//! seen during static generation are build artifacts, not the visited value.
//! These hooks only report a value once the app has hydrated in a live
//! browser; until then the value is `Pending`, which is never the same as
//! `Missing`.

#[cfg(test)]
#[path = "live_param_test.rs"]
mod live_param_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::util::browser;

/// State of one dynamic segment as seen by the browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveParam {
    /// Router not hydrated yet; the value is unknown.
    Pending,
    Known(String),
    /// Hydrated router has no usable value for the segment.
    Missing,
}

impl LiveParam {
    #[must_use]
    pub fn resolve(hydrated: bool, raw: Option<String>) -> Self {
        if !hydrated {
            return Self::Pending;
        }
        match raw {
            Some(value) if !value.trim().is_empty() => Self::Known(value),
            _ => Self::Missing,
        }
    }

    #[must_use]
    pub fn known(&self) -> Option<&str> {
        match self {
            Self::Known(value) => Some(value),
            Self::Pending | Self::Missing => None,
        }
    }
}

/// `false` during static generation and the hydration pass, `true` once the
/// component has mounted in a live browser.
pub fn use_hydrated() -> ReadSignal<bool> {
    let hydrated = RwSignal::new(false);
    // Effects never run during static rendering.
    Effect::new(move |_| {
        if browser::is_live_browser() {
            hydrated.set(true);
        }
    });
    hydrated.read_only()
}

/// Live value of the dynamic segment `name`.
pub fn use_live_param(name: &'static str) -> Memo<LiveParam> {
    let params = use_params_map();
    let hydrated = use_hydrated();
    Memo::new(move |_| LiveParam::resolve(hydrated.get(), params.with(|p| p.get(name))))
}

/// Live values of two segments, known only when both are.
pub fn use_live_param_pair(first: &'static str, second: &'static str) -> Memo<LiveParam2> {
    let params = use_params_map();
    let hydrated = use_hydrated();
    Memo::new(move |_| {
        params.with(|p| LiveParam2::resolve(hydrated.get(), p.get(first), p.get(second)))
    })
}

/// Two segments resolved together (resource id + token).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LiveParam2 {
    Pending,
    Known(String, String),
    Missing,
}

impl LiveParam2 {
    #[must_use]
    pub fn resolve(hydrated: bool, first: Option<String>, second: Option<String>) -> Self {
        match (LiveParam::resolve(hydrated, first), LiveParam::resolve(hydrated, second)) {
            (LiveParam::Pending, _) | (_, LiveParam::Pending) => Self::Pending,
            (LiveParam::Known(a), LiveParam::Known(b)) => Self::Known(a, b),
            _ => Self::Missing,
        }
    }
}
