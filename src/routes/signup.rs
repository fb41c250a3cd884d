use crate::components::{PageShell, RegisterForm};
use crate::features::auth::render::RenderedErrors;
use leptos::prelude::*;

/// Standalone registration page.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let errors = RwSignal::new(RenderedErrors::default());

    view! {
        <PageShell>
            <h1 class="mb-6 text-center text-2xl font-semibold">"Create account"</h1>
            <RegisterForm errors=errors modal_visible=Signal::from(false) />
        </PageShell>
    }
}
