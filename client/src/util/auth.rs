//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every gated route applies identical unauthenticated redirect behavior:
//! decide only after the session has resolved, redirect once per denial.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routing::table::sign_in_location;
use crate::state::auth::AuthState;
use crate::util::browser;

/// Route gate state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Resolving,
    Granted,
    Denied,
}

impl GateState {
    #[must_use]
    pub fn from_auth(state: AuthState) -> Self {
        if state.loading {
            Self::Resolving
        } else if state.is_authenticated {
            Self::Granted
        } else {
            Self::Denied
        }
    }

    /// Children may only be rendered in `Granted`.
    #[must_use]
    pub fn renders_children(self) -> bool {
        self == Self::Granted
    }
}

/// Fires at most one redirect per denial.
///
/// Re-arms only after access is granted again, so a later expiry produces a
/// fresh redirect while repeated `Denied` observations do not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectLatch {
    fired: bool,
}

impl RedirectLatch {
    /// Feed the latest gate state; returns `true` when a redirect should fire.
    pub fn observe(&mut self, state: GateState) -> bool {
        match state {
            GateState::Resolving => false,
            GateState::Granted => {
                self.fired = false;
                false
            }
            GateState::Denied if self.fired => false,
            GateState::Denied => {
                self.fired = true;
                true
            }
        }
    }
}

/// Redirect to the sign-in page whenever the gate settles on `Denied`.
///
/// The effect belongs to the calling component's owner, so unmounting the
/// component before resolution disposes it and no stale redirect fires.
pub fn install_unauth_redirect<F, R>(gate: Memo<GateState>, return_to: R, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
    R: Fn() -> String + 'static,
{
    let mut latch = RedirectLatch::default();
    Effect::new(move |_| {
        let state = gate.get();
        if latch.observe(state) && browser::is_live_browser() {
            let target = sign_in_location(&return_to());
            #[cfg(feature = "hydrate")]
            log::debug!("route gate denied; redirecting to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
