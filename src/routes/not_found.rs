use crate::components::PageShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Fallback page for unknown routes.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageShell>
            <div class="flex flex-col items-center gap-4 py-16 text-center">
                <h1 class="text-5xl font-black text-gray-200">"404"</h1>
                <p class="text-gray-500">"Page not found."</p>
                <A href="/" {..} class="text-sm text-indigo-700 hover:underline">
                    "Go home"
                </A>
            </div>
        </PageShell>
    }
}
