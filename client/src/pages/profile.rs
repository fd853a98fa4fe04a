//! `/profile`: the signed-in user's page. Rendered behind the route gate.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let user = auth.user();

    let name = move || user.get().map(|u| u.display_name().to_owned()).unwrap_or_default();
    let email = move || user.get().map(|u| u.email).unwrap_or_default();

    view! {
        <section class="profile-page">
            <header class="profile-page__header">
                <h1>{name}</h1>
                <p class="profile-page__email">{email}</p>
            </header>
            <h2>"My collections"</h2>
            <p class="profile-page__hint">"Open a set to start adding cards to your collection."</p>
            <button class="btn" on:click=move |_| auth.sign_out()>
                "Sign out"
            </button>
        </section>
    }
}
