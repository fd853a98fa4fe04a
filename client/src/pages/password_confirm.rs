//! `/password/confirm/:id/:token`: token-carrying reset layout.
//!
//! The exported shell is one generic file for every `(id, token)` pair. It
//! renders a fixed skeleton with an addressable mount point and no
//! token-dependent markup; the reset form is attached to the mount point only
//! after hydration and reads both segments from the live URL.

#[cfg(all(test, feature = "ssr"))]
#[path = "password_confirm_test.rs"]
mod password_confirm_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pending::PendingNotice;
use crate::pages::not_found::NotFound;
use crate::routing::live_param::{LiveParam2, use_hydrated, use_live_param_pair};
use crate::routing::table::{PASSWORD_RESET_PATH, SIGN_IN_PATH};
use crate::util::forms::validate_new_password;

/// DOM id of the client mount point inside the reset shell.
pub const MOUNT_POINT_ID: &str = "password-reset-root";

/// Static wrapper; performs no token validation.
#[component]
pub fn PasswordConfirmLayout() -> impl IntoView {
    let hydrated = use_hydrated();
    view! {
        <section class="password-confirm">
            <h1>"Choose a new password"</h1>
            <div id=MOUNT_POINT_ID class="password-confirm__mount">
                <Show when=move || hydrated.get()>
                    <PasswordResetForm/>
                </Show>
            </div>
        </section>
    }
}

/// Client-only reset form bound to the live `id` and `token` segments.
#[component]
fn PasswordResetForm() -> impl IntoView {
    let live = use_live_param_pair("id", "token");
    move || match live.get() {
        LiveParam2::Pending => view! { <PendingNotice/> }.into_any(),
        LiveParam2::Missing => view! { <NotFound/> }.into_any(),
        LiveParam2::Known(id, token) => view! { <ResetFields id token/> }.into_any(),
    }
}

#[component]
fn ResetFields(id: String, token: String) -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let new_password = match validate_new_password(&password.get(), &confirm.get()) {
            Ok(p) => p,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            let token = token.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::confirm_password_reset(&id, &token, &new_password).await {
                    Ok(()) => {
                        info.set(String::new());
                        done.set(true);
                    }
                    Err(e) => info.set(e),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&id, &token, new_password);
        }
    };

    view! {
        <Show
            when=move || done.get()
            fallback=move || {
                view! {
                    <form class="password-confirm__form" on:submit=on_submit.clone()>
                        <input
                            class="form-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="New password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="form-input"
                            type="password"
                            autocomplete="new-password"
                            placeholder="Repeat new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Set password"
                        </button>
                        <Show when=move || !info.get().is_empty()>
                            <p class="form-message">{move || info.get()}</p>
                        </Show>
                        <A href=PASSWORD_RESET_PATH attr:class="form-link">"Request a new link"</A>
                    </form>
                }
            }
        >
            <p class="form-message">"Your password has been changed."</p>
            <A href=SIGN_IN_PATH attr:class="btn btn--primary">"Sign in"</A>
        </Show>
    }
}
