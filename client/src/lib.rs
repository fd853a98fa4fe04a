//! # client
//!
//! Leptos + WASM frontend for the card collection manager, exported as a
//! static site. Pages, components, auth/session state, routing for static
//! shells, and HTTP helpers for the identity provider and card API.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod routing;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the exported shell.
///
/// The not-found document is served for URLs whose route was never
/// rendered into it, so it is cleared and mounted fresh instead.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let body = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body());
    let render_mode = body.as_ref().and_then(|b| b.get_attribute(app::RENDER_MODE_ATTR));
    match body {
        Some(body) if app::is_client_rendered(render_mode.as_deref()) => {
            log::debug!("client-rendering the not-found document");
            body.set_inner_html("");
            leptos::mount::mount_to_body(app::App);
        }
        _ => leptos::mount::hydrate_body(app::App),
    }
}
