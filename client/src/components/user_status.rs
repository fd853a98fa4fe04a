//! Header status display: who is signed in, with sign-in / sign-out actions.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::{PROFILE_PATH, SIGN_IN_PATH};
use crate::state::auth::use_auth;

/// Reads the same auth context as the route gate, so the header and gated
/// pages never disagree.
#[component]
pub fn UserStatus() -> impl IntoView {
    let auth = use_auth();
    let state = auth.state();
    let user = auth.user();

    let on_sign_out = move |_| auth.sign_out();

    move || {
        let current = state.get();
        if current.loading {
            return view! { <span class="user-status user-status--pending">"..."</span> }.into_any();
        }
        match user.get() {
            Some(u) => {
                let label = u.display_name().to_owned();
                view! {
                    <span class="user-status">
                        <A href=PROFILE_PATH attr:class="user-status__name">{label}</A>
                        <button class="btn user-status__sign-out" on:click=on_sign_out>
                            "Sign out"
                        </button>
                    </span>
                }
                    .into_any()
            }
            None => view! {
                <span class="user-status">
                    <A href=SIGN_IN_PATH attr:class="btn btn--primary">"Sign in"</A>
                </span>
            }
                .into_any(),
        }
    }
}
