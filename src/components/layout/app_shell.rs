//! Shared layout wrapper with the header and content container. It keeps
//! navigation markup in one place so routes can focus on content.

use leptos::prelude::*;
use leptos_router::components::A;

/// Wraps routes with a header and main content container.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col bg-gray-50">
            <header class="border-b border-gray-200 bg-white">
                <div class="max-w-screen-lg flex items-center justify-between mx-auto p-4">
                    <A href="/" {..} class="text-lg font-semibold text-gray-900">
                        "Roster"
                    </A>
                    <nav class="flex items-center gap-6 text-sm text-gray-600">
                        <A href="/" {..} class="hover:text-gray-900">
                            "Users"
                        </A>
                        <A href="/health" {..} class="hover:text-gray-900">
                            "Health"
                        </A>
                    </nav>
                </div>
            </header>
            <main class="flex-1 max-w-screen-lg w-full mx-auto p-4">{children()}</main>
        </div>
    }
}
