//! Route gate for pages that require a signed-in user.
//!
//! SYSTEM CONTEXT
//! ==============
//! UX-only guard over the shared auth context: the identity provider and data
//! APIs still enforce access. The gate shows a pending notice while the
//! session is resolving, the children once access is granted, and nothing
//! while a denial redirect is in flight.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::pending::PendingNotice;
use crate::state::auth::use_auth;
use crate::util::auth::{GateState, install_unauth_redirect};

/// Render `children` only for an authenticated session.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let gate = Memo::new(move |_| GateState::from_auth(state.get()));

    let location = use_location();
    let return_to = move || location.pathname.get_untracked();
    install_unauth_redirect(gate, return_to, use_navigate());

    move || match gate.get() {
        GateState::Resolving => view! { <PendingNotice label="Checking your session..."/> }.into_any(),
        GateState::Granted => children().into_any(),
        GateState::Denied => ().into_any(),
    }
}
