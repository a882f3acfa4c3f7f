//! Alert banners for error and informational messages.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let class = match kind {
        AlertKind::Error => {
            "rounded-md border border-rose-300 bg-rose-50 px-4 py-3 text-sm text-rose-800"
        }
        AlertKind::Info => {
            "rounded-md border border-sky-300 bg-sky-50 px-4 py-3 text-sm text-sky-800"
        }
    };

    view! { <div class=class role="alert">{message}</div> }
}
