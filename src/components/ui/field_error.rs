//! Inline field errors, rendered as sibling elements immediately after the
//! input they annotate.

use crate::features::auth::render::{FormKind, RenderedErrors};
use leptos::prelude::*;

/// Renders the error strings attached to one named input. Placed directly
/// after the input element so the sibling relationship holds in the DOM.
#[component]
pub fn FieldError(
    errors: Signal<RenderedErrors>,
    form: FormKind,
    field: &'static str,
) -> impl IntoView {
    view! {
        {move || {
            errors
                .get()
                .inline_for(form, field)
                .into_iter()
                .map(|text| {
                    view! {
                        <span class="mt-1 block text-sm text-red-600" data-field-error=field>
                            {text}
                        </span>
                    }
                })
                .collect_view()
        }}
    }
}
