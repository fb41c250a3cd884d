//! Landing page. Hosts the shared login/register modal so both forms can be
//! reached without leaving the page.

use crate::components::{Alert, AlertKind, AuthModal, PageShell};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let modal_open = RwSignal::new(false);

    view! {
        <PageShell>
            <div class="mx-auto max-w-xl space-y-6 text-center">
                <h1 class="text-3xl font-semibold">"Welcome to the library"</h1>
                <Alert
                    kind=AlertKind::Info
                    message="Log in or create an account to borrow and manage books.".to_string()
                />
                <button
                    class="rounded-lg bg-indigo-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-indigo-800"
                    on:click=move |_| modal_open.set(true)
                >
                    "Log in / Sign up"
                </button>
            </div>
            <AuthModal open=modal_open context=None />
        </PageShell>
    }
}
