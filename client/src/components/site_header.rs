//! Site-wide header with navigation and the user status display.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::user_status::UserStatus;
use crate::routing::table::{HOME_PATH, PROFILE_PATH};

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <A href=HOME_PATH attr:class="site-header__brand">"Cardbinder"</A>
            <nav class="site-header__nav">
                <A href=HOME_PATH>"Sets"</A>
                <A href=PROFILE_PATH>"My collections"</A>
            </nav>
            <UserStatus/>
        </header>
    }
}
