//! Transient placeholder shown while something is not yet known.

use leptos::prelude::*;

/// Neutral "please wait" block. Rendered into static shells, so it must not
/// depend on session or path values.
#[component]
pub fn PendingNotice(#[prop(into, default = "Loading...".into())] label: String) -> impl IntoView {
    view! {
        <div class="pending-notice" role="status" aria-live="polite">
            <span class="pending-notice__spinner" aria-hidden="true"></span>
            <span class="pending-notice__label">{label}</span>
        </div>
    }
}
