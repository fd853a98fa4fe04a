//! Home page: every card set, newest first.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::pending::PendingNotice;

#[component]
pub fn HomePage() -> impl IntoView {
    let sets = LocalResource::new(|| crate::net::api::fetch_card_sets());

    view! {
        <section class="home-page">
            <h1>"Card sets"</h1>
            <Suspense fallback=move || view! { <PendingNotice label="Loading sets..."/> }>
                {move || {
                    sets.get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => view! {
                                <ul class="home-page__sets">
                                    {list
                                        .into_iter()
                                        .map(|set| {
                                            let href = format!("/sets/{}", set.id);
                                            view! {
                                                <li>
                                                    <A href=href>{set.name}</A>
                                                    <span class="home-page__series">{set.series}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            }
                                .into_any(),
                            _ => view! { <p>"No sets available right now."</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
