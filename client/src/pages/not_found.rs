//! Terminal not-found view, also rendered into `404.html`.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::table::HOME_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"Page not found"</h1>
            <p>"There is nothing at this address."</p>
            <A href=HOME_PATH attr:class="btn">"Back to sets"</A>
        </section>
    }
}
