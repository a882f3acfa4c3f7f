//! Fallback page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <div class="flex flex-col items-center justify-center min-h-[40vh] text-center">
                <h1 class="text-6xl font-black text-gray-300 select-none">"404"</h1>
                <p class="mt-2 text-lg font-semibold text-gray-900">"Page not found"</p>
                <A
                    href="/"
                    {..}
                    class="mt-6 text-sm text-indigo-600 hover:text-indigo-800"
                >
                    "Back to the user list"
                </A>
            </div>
        </AppShell>
    }
}
