//! Alert banners for transport errors and informational notices. Messages must
//! be safe to render and should never include raw response bodies beyond the
//! sanitized excerpt the API layer produces.

use leptos::prelude::*;

/// Supported alert styles.
#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
        }
        AlertKind::Info => {
            "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
