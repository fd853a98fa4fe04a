//! Root application component with routing and context providers.

#[cfg(all(test, feature = "ssr"))]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::ProtectedRoute;
use crate::components::site_header::SiteHeader;
use crate::pages::{
    collection::CollectionPage, home::HomePage, login::LoginPage, not_found::NotFound,
    password_confirm::PasswordConfirmLayout, password_reset::PasswordResetPage, profile::ProfilePage, set::SetPage,
};
use crate::state::auth::provide_auth_context;

/// Body attribute telling the WASM entry point how to boot the document.
pub const RENDER_MODE_ATTR: &str = "data-render";
/// `RENDER_MODE_ATTR` value for documents the client renders from scratch.
pub const CLIENT_RENDER: &str = "client";

/// HTML document written for every exported shell.
///
/// A static host serves the not-found document for any unknown URL, so the
/// router in the browser may match a route that was never rendered into it.
/// That document is marked `client_rendered` and is replaced, not hydrated.
pub fn shell(options: LeptosOptions, client_rendered: bool) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Cardbinder"</title>
                <link rel="stylesheet" href="/pkg/cardbinder.css"/>
                <HydrationScripts options/>
            </head>
            <body data-render=client_rendered.then_some(CLIENT_RENDER)>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the single auth context for the tab and sets up client-side
/// routing. The session is only requested once mounted in the browser, so
/// exported shells always see an unresolved session.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = provide_auth_context();
    Effect::new(move |_| auth.refresh());

    view! {
        <Title text="Cardbinder"/>

        <Router>
            <SiteHeader/>
            <main class="site-main">
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <ProtectedRoute><ProfilePage/></ProtectedRoute> }
                    />
                    <Route path=(StaticSegment("password"), StaticSegment("reset")) view=PasswordResetPage/>
                    <Route
                        path=(StaticSegment("password"), StaticSegment("confirm"), ParamSegment("id"), ParamSegment("token"))
                        view=PasswordConfirmLayout
                    />
                    <Route path=(StaticSegment("collections"), ParamSegment("id")) view=CollectionPage/>
                    <Route path=(StaticSegment("sets"), ParamSegment("setId")) view=SetPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Render the full document for `path` as the export tool writes it.
///
/// The router is seeded with `path`, so dynamic routes see the build
/// placeholder; nothing session- or browser-dependent runs. The not-found
/// document is marked for client rendering.
#[cfg(feature = "ssr")]
pub fn render_static_shell(path: &str, options: &LeptosOptions) -> String {
    use leptos::tachys::view::RenderHtml;

    let client_rendered = path == crate::routing::table::NOT_FOUND_PATH;
    let owner = Owner::new();
    owner.with(|| {
        provide_context(leptos_router::location::RequestUrl::new(path));
        shell(options.clone(), client_rendered).to_html()
    })
}

/// Whether a document's `RENDER_MODE_ATTR` value asks for a client render.
#[must_use]
pub fn is_client_rendered(render_mode: Option<&str>) -> bool {
    render_mode == Some(CLIENT_RENDER)
}
