use crate::app_lib::build_info;
use crate::components::AppShell;
use leptos::prelude::*;

#[component]
pub fn HealthPage() -> impl IntoView {
    let commit = build_info::git_commit_hash();

    view! {
        <AppShell>
            <div class="flex justify-center">
                <div class="w-full max-w-md rounded-md border border-gray-200 bg-white shadow-sm">
                    <div class="border-b border-gray-200 px-6 py-3 font-semibold text-gray-700">
                        "Build Version"
                    </div>
                    <div class="p-6 text-sm text-gray-900">
                        <pre class="text-center">{commit}</pre>
                    </div>
                </div>
            </div>
        </AppShell>
    }
}
