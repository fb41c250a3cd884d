use crate::app_lib::build_info;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PageShell(children: Children) -> impl IntoView {
    view! {
        <div class="flex min-h-screen flex-col bg-white text-gray-900">
            <header class="border-b border-gray-200">
                <nav class="mx-auto flex max-w-5xl items-center justify-between px-4 py-3">
                    <A href="/" {..} class="text-lg font-semibold">
                        "Library"
                    </A>
                    <div class="flex items-center gap-4 text-sm">
                        <A href="/login" {..} class="hover:text-indigo-700">
                            "Log in"
                        </A>
                        <A href="/signup" {..} class="hover:text-indigo-700">
                            "Sign up"
                        </A>
                    </div>
                </nav>
            </header>
            <main class="mx-auto w-full max-w-5xl flex-1 px-4 py-8">{children()}</main>
            <footer class="border-t border-gray-200 px-4 py-3 text-center text-xs text-gray-400">
                {format!("build {}", build_info::git_commit_hash())}
            </footer>
        </div>
    }
}
