//! `/collections/:id` placeholder route.
//!
//! Collections are shown on the profile page; this route exists so the five
//! pre-rendered ids keep working as links. Any reached id redirects to
//! `/profile`. The id plays no further part in what is shown.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::pending::PendingNotice;
use crate::pages::not_found::NotFound;
use crate::routing::Resolution;
use crate::routing::live_param::{LiveParam, use_live_param};
use crate::routing::table::{PROFILE_PATH, resolve_collection};
use crate::util::browser;

/// What the collection route does for a live segment value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CollectionOutcome {
    Waiting,
    Redirect,
    NotFound,
}

pub(crate) fn collection_outcome(live: &LiveParam) -> CollectionOutcome {
    match live {
        LiveParam::Pending => CollectionOutcome::Waiting,
        LiveParam::Missing => CollectionOutcome::NotFound,
        LiveParam::Known(id) => match resolve_collection(id) {
            Resolution::Shell(_) => CollectionOutcome::Redirect,
            Resolution::ClientResolved { .. } | Resolution::NotFound => CollectionOutcome::NotFound,
        },
    }
}

#[component]
pub fn CollectionPage() -> impl IntoView {
    let live = use_live_param("id");
    let outcome = Memo::new(move |_| live.with(collection_outcome));
    let navigate = use_navigate();

    // The redirect is an effect, so static generation never performs it.
    Effect::new(move |_| {
        if outcome.get() == CollectionOutcome::Redirect && browser::is_live_browser() {
            navigate(PROFILE_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match outcome.get() {
        CollectionOutcome::NotFound => view! { <NotFound/> }.into_any(),
        CollectionOutcome::Waiting | CollectionOutcome::Redirect => {
            view! { <PendingNotice label="Opening your collections..."/> }.into_any()
        }
    }
}
