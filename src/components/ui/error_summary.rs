//! Page-level error region for messages that match no rendered input. Labeled
//! lines carry their field name; whole-form lines show only the message text
//! under the region's "Errors" heading.

use crate::features::auth::render::RenderedErrors;
use leptos::prelude::*;

#[component]
pub fn ErrorSummary(errors: Signal<RenderedErrors>) -> impl IntoView {
    view! {
        {move || {
            let state = errors.get();
            (!state.summary().is_empty()).then(|| {
                let lines = state
                    .summary()
                    .iter()
                    .map(|line| view! { <p class="text-sm text-red-600">{line.display()}</p> })
                    .collect_view();
                view! {
                    <div class="mt-4 rounded-lg border border-red-200 bg-red-50 p-4" role="alert">
                        <p class="mb-1 text-sm font-semibold text-red-700">"Errors"</p>
                        {lines}
                    </div>
                }
            })
        }}
    }
}
