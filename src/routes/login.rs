use crate::components::{LoginForm, PageShell};
use crate::features::auth::render::RenderedErrors;
use leptos::prelude::*;

/// Standalone login page; no modal, no context hint.
#[component]
pub fn LoginPage() -> impl IntoView {
    let errors = RwSignal::new(RenderedErrors::default());

    view! {
        <PageShell>
            <h1 class="mb-6 text-center text-2xl font-semibold">"Log in"</h1>
            <LoginForm
                errors=errors
                modal_visible=Signal::from(false)
                context=None
                endpoint=None
            />
        </PageShell>
    }
}
