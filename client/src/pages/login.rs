//! Sign-in page with an email + password form.
//!
//! Never wrapped in the route gate: the gate redirects here.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;

use crate::routing::table::{PASSWORD_RESET_PATH, PROFILE_PATH, safe_return_path};
use crate::util::forms::validate_credentials;

/// Where to go after signing in, from the `next` query value.
pub(crate) fn post_sign_in_target(next: Option<&str>) -> String {
    next.and_then(safe_return_path).unwrap_or(PROFILE_PATH).to_owned()
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let query = use_query_map();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_credentials(&email.get(), &password.get()) {
            Ok(pair) => pair,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let target = post_sign_in_target(query.get_untracked().get("next").as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                // Full reload so the session store starts from the new cookie.
                Ok(()) => crate::util::browser::hard_navigate(&target),
                Err(e) => {
                    info.set(e);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, target);
        }
    };

    view! {
        <section class="auth-card">
            <h1>"Sign in"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="email"
                    autocomplete="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="password"
                    autocomplete="current-password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
            <A href=PASSWORD_RESET_PATH attr:class="form-link">"Forgot your password?"</A>
        </section>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
