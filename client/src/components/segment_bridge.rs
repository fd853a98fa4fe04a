//! Bridge from a live path segment to the component that loads it.

use leptos::prelude::*;

use crate::components::pending::PendingNotice;
use crate::pages::not_found::NotFound;
use crate::routing::live_param::{LiveParam, use_live_param};

/// Read segment `name` in the browser and hand its value to `render`.
///
/// Shows a pending notice until the router has hydrated, and the not-found
/// view if the hydrated router has no value. `render` receives the visited
/// value, never a build-time placeholder.
#[component]
pub fn SegmentBridge<F, IV>(name: &'static str, render: F) -> impl IntoView
where
    F: Fn(String) -> IV + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let live = use_live_param(name);
    move || match live.get() {
        LiveParam::Pending => view! { <PendingNotice/> }.into_any(),
        LiveParam::Known(value) => render(value).into_any(),
        LiveParam::Missing => view! { <NotFound/> }.into_any(),
    }
}
