//! Notification Stack
//!
//! Renders the transient notifications from the presenter state.
//! Expiry timers live with the state; this component only displays and
//! forwards manual dismissals.

use leptos::*;

use crate::state::global::{GlobalState, Severity, Toast};

/// Stacked notifications, newest at the bottom.
#[component]
pub fn ToastStack() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2 w-80">
            {move || {
                state.ui.with(|ui| ui.toasts.clone())
                    .into_iter()
                    .map(|toast| view! { <ToastMessage toast /> })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
fn ToastMessage(toast: Toast) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (icon, accent) = match toast.severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Error => ("⚠", "bg-red-600"),
        Severity::Info => ("ℹ", "bg-blue-600"),
    };

    let id = toast.id;
    view! {
        <div class=format!(
            "{accent} flex items-center text-white px-4 py-3 rounded-lg shadow-lg \
             animate-slide-right"
        )>
            <span class="text-lg mr-3">{icon}</span>
            <span class="text-sm font-medium">{toast.message}</span>
            <button
                on:click=move |_| state.dismiss_toast(id)
                class="ml-auto pl-3 text-white/70 hover:text-white"
            >
                "×"
            </button>
        </div>
    }
}
