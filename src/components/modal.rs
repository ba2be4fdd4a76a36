//! Modal Component
//!
//! Generic overlay chrome. Modals stay mounted and toggle the `hidden`
//! class, matching the always-present markup they replace; visibility
//! is decided by the presenter's open set.

use leptos::*;

use crate::state::global::{GlobalState, ModalId};

/// A named overlay with a dimmed backdrop and a close control.
#[component]
pub fn Modal(id: ModalId, title: &'static str, children: Children) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/60"
            class:hidden=move || !state.ui.with(|ui| ui.is_modal_open(id))
        >
            <div class="bg-gray-800 rounded-xl p-6 w-full max-w-md mx-4 shadow-xl">
                <div class="flex items-center justify-between mb-4">
                    <h2 class="text-xl font-semibold">{title}</h2>
                    <button
                        on:click=move |_| state.close_modals()
                        class="text-gray-400 hover:text-white text-2xl leading-none"
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
