//! `/sets/:setId`: card set view resolved in the browser.
//!
//! The exported shells use placeholder ids; the id shown here is always the
//! one in the visited URL, read through the segment bridge.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pending::PendingNotice;
use crate::components::segment_bridge::SegmentBridge;
use crate::net::types::CardSet;
use crate::routing::table::HOME_PATH;

#[component]
pub fn SetPage() -> impl IntoView {
    view! {
        <SegmentBridge name="setId" render=|set_id: String| view! { <SetView set_id/> }/>
    }
}

/// Load and show one set. `set_id` is the runtime value.
#[component]
pub fn SetView(set_id: String) -> impl IntoView {
    let id = set_id.clone();
    let set = LocalResource::new(move || {
        let id = id.clone();
        async move { crate::net::api::fetch_card_set(&id).await }
    });

    view! {
        <section class="set-view" data-set-id=set_id>
            <Suspense fallback=move || view! { <PendingNotice label="Loading set..."/> }>
                {move || {
                    set.get()
                        .map(|result| match result {
                            Ok(set) => view! { <SetDetails set/> }.into_any(),
                            Err(message) => view! {
                                <div class="set-view__error">
                                    <p>{message}</p>
                                    <A href=HOME_PATH attr:class="btn">"All sets"</A>
                                </div>
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn SetDetails(set: CardSet) -> impl IntoView {
    let released = set.release_date.clone().unwrap_or_else(|| "Unknown".to_owned());
    view! {
        <header class="set-view__header">
            <h1>{set.name}</h1>
            <p class="set-view__series">{set.series}</p>
        </header>
        <dl class="set-view__facts">
            <dt>"Cards"</dt>
            <dd>{set.total}</dd>
            <dt>"Released"</dt>
            <dd>{released}</dd>
        </dl>
    }
}
