//! Loading States
//!
//! Spinner and skeleton placeholders shown while a section waits on
//! the backend.

use leptos::*;

/// Centered spinner for a content region that has nothing to show yet.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-12 text-gray-500">
            <div class="loading-spinner w-8 h-8 mb-3" />
            <span class="text-sm">"Loading..."</span>
        </div>
    }
}

/// Grey placeholder rows standing in for a list that is still loading.
#[component]
pub fn ListSkeleton(
    #[prop(default = 3)]
    rows: usize,
) -> impl IntoView {
    view! {
        <div class="animate-pulse">
            {(0..rows).map(|_| view! {
                <div class="flex items-center justify-between py-3">
                    <div class="space-y-2">
                        <div class="h-4 w-40 bg-gray-700 rounded" />
                        <div class="h-3 w-56 bg-gray-700 rounded" />
                    </div>
                    <div class="h-4 w-16 bg-gray-700 rounded" />
                </div>
            }).collect_view()}
        </div>
    }
}
