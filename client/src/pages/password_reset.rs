//! `/password/reset`: request a reset link by email.

use leptos::prelude::*;

use crate::util::forms::validate_email;

#[component]
pub fn PasswordResetPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = match validate_email(&email.get()) {
            Ok(e) => e,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Sending...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::request_password_reset(&email_value).await {
                // Same answer whether or not the address is registered.
                Ok(()) => info.set("If that address has an account, a reset link is on its way.".to_owned()),
                Err(e) => info.set(format!("Could not send the link: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = email_value;
        }
    };

    view! {
        <section class="auth-card">
            <h1>"Reset your password"</h1>
            <form class="auth-form" on:submit=on_submit>
                <input
                    class="form-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    "Send reset link"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
