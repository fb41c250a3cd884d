//! Shared modal hosting both auth forms at once. While it is open, both forms
//! report the modal as visible, which is what reroutes duplicate `email`
//! errors to the login form. The two forms share one error state, so a line
//! rerouted across forms always has a slot that renders it.

use crate::components::forms::{LoginForm, RegisterForm};
use crate::features::auth::render::RenderedErrors;
use leptos::prelude::*;

#[component]
pub fn AuthModal(open: RwSignal<bool>, context: Option<&'static str>) -> impl IntoView {
    let modal_visible = Signal::derive(move || open.get());
    let errors = RwSignal::new(RenderedErrors::default());

    view! {
        {move || {
            open.get()
                .then(|| {
                    view! {
                        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4">
                            <div class="max-h-full w-full max-w-3xl overflow-y-auto rounded-2xl bg-white p-6 shadow-xl">
                                <div class="mb-4 flex items-center justify-between">
                                    <h2 class="text-lg font-semibold">"Log in or create an account"</h2>
                                    <button
                                        class="text-sm text-gray-500 hover:text-gray-900"
                                        on:click=move |_| open.set(false)
                                    >
                                        "Close"
                                    </button>
                                </div>
                                <div class="grid gap-8 sm:grid-cols-2">
                                    <section>
                                        <h3 class="mb-3 text-sm font-semibold uppercase tracking-wide text-gray-500">
                                            "Log in"
                                        </h3>
                                        <LoginForm
                                            errors=errors
                                            modal_visible=modal_visible
                                            context=context
                                            endpoint=None
                                        />
                                    </section>
                                    <section>
                                        <h3 class="mb-3 text-sm font-semibold uppercase tracking-wide text-gray-500">
                                            "Sign up"
                                        </h3>
                                        <RegisterForm errors=errors modal_visible=modal_visible />
                                    </section>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
